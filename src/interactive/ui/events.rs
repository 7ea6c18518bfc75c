use crate::schemas::SkipOption;

#[derive(Clone, Debug)]
pub enum Message {
    // Catalog events
    LoadCatalog,
    CatalogLoaded(u64, Vec<SkipOption>), // (request_id, skips)
    CatalogFailed(u64, String),          // (request_id, error message)

    // Selection events
    HighlightSkip(usize),
    SelectSkip(usize),

    // Summary bar actions
    Continue,
    Back,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),

    // Terminal events
    Quit,
}
