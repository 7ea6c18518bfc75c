use crate::catalog::Location;
use crate::schemas::SkipOption;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Catalog,
    Help,
}

/// Display state of the catalog. Exactly one of loading, error or data is
/// active at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    NotLoaded,
    Loading,
    Loaded(Vec<SkipOption>),
    Errored(String),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Loaded skips, or an empty slice in every other state.
    pub fn skips(&self) -> &[SkipOption] {
        match self {
            CatalogState::Loaded(skips) => skips,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// How the screen ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    Continue(SkipOption),
    Back,
    Quit,
}

// Fetch request and response for the catalog worker
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub id: u64,
    pub location: Location,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub id: u64,
    pub result: Result<Vec<SkipOption>, String>,
}
