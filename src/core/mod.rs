pub mod engine;
pub mod matcher;

pub use crate::domain::model::{MenuItem, Order, VendorBlock};
pub use crate::domain::ports::CatalogueSource;
pub use crate::utils::error::Result;
