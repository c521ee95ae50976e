use crate::core::matcher::Matcher;
use crate::core::{CatalogueSource, Order};
use crate::utils::error::Result;
use chrono::Local;

/// Runs one order against one catalogue: resolve the clock, open a fresh
/// read handle, scan.
pub struct MatchEngine<S: CatalogueSource> {
    source: S,
}

impl<S: CatalogueSource> MatchEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self, order: &Order) -> Result<String> {
        let now = order
            .simulated_now()
            .unwrap_or_else(|| Local::now().naive_local());
        tracing::info!(
            %now,
            target = %order.target(),
            postcode = order.postcode(),
            covers = order.covers(),
            "matching catalogue"
        );

        let reader = self.source.open(order.catalogue_path())?;
        let suggestions = Matcher::new(order, now).suggestions(reader)?;

        tracing::info!(items = suggestions.lines().count(), "matching complete");
        Ok(suggestions)
    }
}
