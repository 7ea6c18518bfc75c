//! Loading the skip catalog for a location.

pub mod error;
pub mod http;

use std::collections::HashSet;

use crate::schemas::SkipOption;

pub use error::CatalogError;
pub use http::{DEFAULT_BASE_URL, HttpCatalogSource, catalog_url};

pub const DEFAULT_POSTCODE: &str = "NR32";
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Where the catalog is priced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_POSTCODE, DEFAULT_AREA)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.area.is_empty() {
            write!(f, "{}", self.postcode)
        } else {
            write!(f, "{} ({})", self.area, self.postcode)
        }
    }
}

/// Anything that can produce the skip catalog for a location.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, location: &Location) -> Result<Vec<SkipOption>, CatalogError>;
}

/// Parses a response body into a catalog. The whole catalog is rejected if
/// any record is malformed or two records share an id.
pub fn parse_catalog(body: &str) -> Result<Vec<SkipOption>, CatalogError> {
    let skips: Vec<SkipOption> =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(skips.len());
    for skip in &skips {
        if !seen.insert(skip.id) {
            return Err(CatalogError::DuplicateId(skip.id));
        }
    }

    Ok(skips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, size: u32) -> String {
        format!(
            r#"{{"id":{id},"size":{size},"hire_period_days":14,"price_before_vat":211,"vat":20,"allowed_on_road":true,"allows_heavy_waste":false}}"#
        )
    }

    #[test]
    fn test_parse_catalog() {
        let body = format!("[{},{}]", record(1, 4), record(2, 6));
        let skips = parse_catalog(&body).unwrap();
        assert_eq!(skips.len(), 2);
        assert_eq!(skips[0].id, 1);
        assert_eq!(skips[1].size, 6);
        assert_eq!(skips[0].final_price(), 253);
    }

    #[test]
    fn test_parse_empty_catalog() {
        let skips = parse_catalog("[]").unwrap();
        assert!(skips.is_empty());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let body = format!("[{},{}]", record(7, 4), record(7, 6));
        let err = parse_catalog(&body).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(7)));
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let err = parse_catalog(r#"{"error":"not found"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let body = r#"[{"id":1,"size":"big"}]"#;
        assert!(matches!(parse_catalog(body), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::default().to_string(), "Lowestoft (NR32)");
        assert_eq!(Location::new("SW1A", "").to_string(), "SW1A");
    }
}
