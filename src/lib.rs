pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalCatalogue, CliConfig};
pub use core::{engine::MatchEngine, matcher::Matcher};
pub use domain::model::{MenuItem, Order, VendorBlock};
pub use domain::ports::CatalogueSource;
pub use utils::error::{MatchError, Result};
