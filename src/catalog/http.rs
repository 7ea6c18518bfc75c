use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use super::{CatalogError, CatalogSource, Location, parse_catalog};
use crate::schemas::SkipOption;

pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk";

/// Builds `{base}/api/skips/by-location?postcode=..&area=..`.
pub fn catalog_url(base_url: &str, location: &Location) -> Result<Url, CatalogError> {
    let endpoint = format!("{}/api/skips/by-location", base_url.trim_end_matches('/'));
    Url::parse_with_params(
        &endpoint,
        &[
            ("postcode", location.postcode.as_str()),
            ("area", location.area.as_str()),
        ],
    )
    .map_err(|e| CatalogError::InvalidEndpoint {
        url: endpoint.clone(),
        reason: e.to_string(),
    })
}

/// Fetches the catalog from the skip pricing service over HTTP.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self, location: &Location) -> Result<Vec<SkipOption>, CatalogError> {
        let url = catalog_url(&self.base_url, location)?;
        info!(%url, "Fetching skip catalog");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(error = %e, "Skip catalog request failed");
            CatalogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Skip catalog request returned an error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let skips = parse_catalog(&body)?;
        debug!(count = skips.len(), "Received skip catalog");
        Ok(skips)
    }
}
