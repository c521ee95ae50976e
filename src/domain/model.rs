use crate::domain::ports::CatalogueSource;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation;
use chrono::{NaiveDateTime, TimeDelta};
use std::path::{Path, PathBuf};

/// Field separator used throughout the catalogue format and the output.
pub const DELIMITER: char = ';';

/// A validated catering order. Construction checks every field; once built
/// an Order is immutable and downstream code does not re-validate it.
#[derive(Debug, Clone)]
pub struct Order {
    catalogue_path: PathBuf,
    target: NaiveDateTime,
    postcode: String,
    covers: u32,
    simulated_now: Option<NaiveDateTime>,
}

impl Order {
    /// Builds an order from the five raw positional fields:
    /// `filename dd/mm/yy hh:mm postcode amount`.
    pub fn from_args(args: &[String], source: &dyn CatalogueSource) -> Result<Self> {
        if args.len() != 5 {
            return Err(MatchError::invalid_input(
                "input arguments",
                format!("Right format is: \"{}\"", validation::INPUT_FORMAT),
            ));
        }
        let catalogue_path = source.resolve(&args[0])?;
        let date = validation::parse_date(&args[1])?;
        let time = validation::parse_time(&args[2])?;
        validation::validate_postcode(&args[3])?;
        let covers = validation::parse_covers(&args[4])?;
        Ok(Self {
            catalogue_path,
            target: NaiveDateTime::new(date, time),
            postcode: args[3].clone(),
            covers,
            simulated_now: None,
        })
    }

    /// Pins the clock used for lead-time arithmetic. Debugging and tests
    /// only; validation is unaffected.
    pub fn with_simulated_now(mut self, now: NaiveDateTime) -> Self {
        self.simulated_now = Some(now);
        self
    }

    pub fn catalogue_path(&self) -> &Path {
        &self.catalogue_path
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn covers(&self) -> u32 {
        self.covers
    }

    pub fn simulated_now(&self) -> Option<NaiveDateTime> {
        self.simulated_now
    }
}

/// One vendor header line. Lives only while its blank-line-delimited group
/// is being scanned.
#[derive(Debug, Clone)]
pub struct VendorBlock {
    pub name: String,
    pub delivery_postcode: String,
    pub max_covers: u32,
}

impl VendorBlock {
    /// Parses `<name>;<postcode>;<max covers>`.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let [name, postcode, max_covers] = fields.as_slice() else {
            return Err(format!(
                "expected \"name;postcode;max covers\", got {} field(s)",
                fields.len()
            ));
        };
        let max_covers = max_covers
            .parse()
            .map_err(|_| format!("vendor capacity \"{max_covers}\" is not a number"))?;
        Ok(Self {
            name: name.to_string(),
            delivery_postcode: postcode.to_string(),
            max_covers,
        })
    }
}

/// One menu-item line belonging to the most recently parsed vendor header.
/// Allergens are an opaque passthrough.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: String,
    pub allergens: String,
    pub lead_time_hours: u32,
}

impl MenuItem {
    /// Parses `<name>;<allergens or empty>;<lead time>h`.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let [name, allergens, lead_time] = fields.as_slice() else {
            return Err(format!(
                "expected \"name;allergens;lead time\", got {} field(s)",
                fields.len()
            ));
        };
        let lead_time_hours = validation::parse_lead_time(lead_time)
            .ok_or_else(|| format!("lead time \"{lead_time}\" is not of the form \"<hours>h\""))?;
        Ok(Self {
            name: name.to_string(),
            allergens: allergens.to_string(),
            lead_time_hours,
        })
    }

    pub fn lead_time(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.lead_time_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_block_parse() {
        let vendor = VendorBlock::parse("Ghana Kitchen;NW42QA;40").unwrap();
        assert_eq!(vendor.name, "Ghana Kitchen");
        assert_eq!(vendor.delivery_postcode, "NW42QA");
        assert_eq!(vendor.max_covers, 40);

        assert!(VendorBlock::parse("Ghana Kitchen;NW42QA").is_err());
        assert!(VendorBlock::parse("Ghana Kitchen;NW42QA;plenty").is_err());
    }

    #[test]
    fn test_menu_item_parse() {
        let item = MenuItem::parse("Breakfast;gluten,eggs;12h").unwrap();
        assert_eq!(item.name, "Breakfast");
        assert_eq!(item.allergens, "gluten,eggs");
        assert_eq!(item.lead_time_hours, 12);

        let no_allergens = MenuItem::parse("Premium meat selection;;36h").unwrap();
        assert_eq!(no_allergens.allergens, "");

        assert!(MenuItem::parse("Breakfast;gluten,eggs;12").is_err());
        assert!(MenuItem::parse("Breakfast;12h").is_err());
    }
}
