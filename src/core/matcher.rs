use crate::core::{MenuItem, Order, VendorBlock};
use crate::domain::model::DELIMITER;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::postcode_area;
use chrono::NaiveDateTime;
use std::io::BufRead;

/// Where the scan is within the current blank-line-delimited group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupState {
    /// Next non-blank line is a vendor header.
    AwaitingHeader,
    /// Inside a group; eligibility was decided by its header and applies
    /// to every item in the group.
    InGroup { eligible: bool },
}

/// Streams a vendor catalogue and collects the menu items that qualify for
/// one order. Single forward pass; `now` is threaded in explicitly so runs
/// are deterministic and independent.
pub struct Matcher<'a> {
    order: &'a Order,
    now: NaiveDateTime,
}

impl<'a> Matcher<'a> {
    pub fn new(order: &'a Order, now: NaiveDateTime) -> Self {
        Self { order, now }
    }

    /// Returns one `name;allergens` line per qualifying item, in catalogue
    /// order, each newline-terminated. Empty string when nothing qualifies.
    pub fn suggestions<R: BufRead>(&self, reader: R) -> Result<String> {
        let mut out = String::new();
        let mut state = GroupState::AwaitingHeader;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            let line_no = idx + 1;

            if line.trim().is_empty() {
                state = GroupState::AwaitingHeader;
                continue;
            }

            match state {
                GroupState::AwaitingHeader => {
                    let vendor = VendorBlock::parse(line).map_err(|reason| {
                        MatchError::Catalogue { line: line_no, reason }
                    })?;
                    let eligible = self.vendor_eligible(&vendor);
                    tracing::debug!(vendor = %vendor.name, eligible, "vendor group");
                    state = GroupState::InGroup { eligible };
                }
                GroupState::InGroup { eligible } => {
                    // Ineligible groups are still parsed to stay in sync
                    // with the group structure.
                    let item = MenuItem::parse(line).map_err(|reason| {
                        MatchError::Catalogue { line: line_no, reason }
                    })?;
                    if eligible && self.enough_notice(&item) {
                        out.push_str(&item.name);
                        out.push(DELIMITER);
                        out.push_str(&item.allergens);
                        out.push('\n');
                    }
                }
            }
        }

        Ok(out)
    }

    /// A vendor qualifies when its delivery area matches the order's and
    /// its capacity covers the headcount (inclusive).
    fn vendor_eligible(&self, vendor: &VendorBlock) -> bool {
        let can_deliver =
            postcode_area(&vendor.delivery_postcode) == postcode_area(self.order.postcode());
        let can_cover = vendor.max_covers >= self.order.covers();
        can_deliver && can_cover
    }

    /// Strictly more than the item's lead time must remain before the
    /// requested delivery moment.
    fn enough_notice(&self, item: &MenuItem) -> bool {
        self.order.target() > self.now + item.lead_time()
    }
}
