use thiserror::Error;

/// Why a catalog fetch failed. Every variant is shown to the user as a
/// failed catalog load; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to reach the skip pricing service: {0}")]
    Transport(String),

    #[error("Failed to fetch skip data ({status})")]
    Status { status: u16 },

    #[error("Failed to read skip data: {0}")]
    Decode(String),

    #[error("Skip data contains duplicate id {0}")]
    DuplicateId(u64),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status {
                status: status.as_u16(),
            }
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}
