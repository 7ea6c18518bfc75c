pub mod catalog;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod pricing;
pub mod schemas;

pub use catalog::{CatalogError, CatalogSource, HttpCatalogSource, Location, parse_catalog};
pub use interactive::{SelectionOutcome, SkipSelection};
pub use pricing::{format_price, price_with_vat};
pub use schemas::{PricedSkip, SkipOption};
