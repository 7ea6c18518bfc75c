use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::CatalogSource;
use crate::interactive::domain::models::{FetchRequest, FetchResponse};

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Runs one fetch. Failures are flattened into the message shown on the error screen.
    pub fn fetch(&self, request: FetchRequest) -> FetchResponse {
        debug!(id = request.id, location = %request.location, "Catalog fetch started");

        let result = match self.source.fetch(&request.location) {
            Ok(skips) => {
                debug!(id = request.id, count = skips.len(), "Catalog fetch finished");
                Ok(skips)
            }
            Err(e) => {
                warn!(id = request.id, error = %e, "Catalog fetch failed");
                Err(e.to_string())
            }
        };

        FetchResponse {
            id: request.id,
            result,
        }
    }
}
