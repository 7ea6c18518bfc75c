use tracing::debug;

use crate::catalog::Location;
use crate::interactive::constants::*;
use crate::interactive::domain::models::{CatalogState, FetchRequest, SelectionOutcome};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::SkipOption;

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub location: Location,
    pub catalog: CatalogState,
    pub current_request_id: u64,
    pub selection: SelectionState,
    pub ui: UiState,
}

pub struct SelectionState {
    /// Cursor position in the card list.
    pub highlighted_index: usize,
    /// The chosen skip. Always an item of the loaded catalog.
    pub selected: Option<SkipOption>,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl AppState {
    pub fn new(location: Location) -> Self {
        Self {
            mode: Mode::Catalog,
            location,
            catalog: CatalogState::NotLoaded,
            current_request_id: 0,
            selection: SelectionState {
                highlighted_index: 0,
                selected: None,
            },
            ui: UiState { message: None },
        }
    }

    pub fn selected_skip(&self) -> Option<&SkipOption> {
        self.selection.selected.as_ref()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::LoadCatalog => {
                // Only one fetch may be in flight
                if self.catalog.is_loading() {
                    return Command::None;
                }
                self.current_request_id += 1;
                self.catalog = CatalogState::Loading;
                self.selection.selected = None;
                self.selection.highlighted_index = 0;
                self.ui.message = None;
                Command::FetchCatalog(FetchRequest {
                    id: self.current_request_id,
                    location: self.location.clone(),
                })
            }
            Message::CatalogLoaded(id, skips) => {
                if !self.accepts_response(id) {
                    debug!(id, "Ignoring stale catalog response");
                    return Command::None;
                }
                self.catalog = CatalogState::Loaded(skips);
                self.selection.highlighted_index = 0;
                Command::None
            }
            Message::CatalogFailed(id, error) => {
                if !self.accepts_response(id) {
                    debug!(id, "Ignoring stale catalog error");
                    return Command::None;
                }
                self.catalog = CatalogState::Errored(error);
                Command::None
            }
            Message::HighlightSkip(index) => {
                if index < self.catalog.skips().len() {
                    self.selection.highlighted_index = index;
                }
                Command::None
            }
            Message::SelectSkip(index) => {
                let Some(skip) = self.catalog.skips().get(index).cloned() else {
                    return Command::None;
                };
                self.selection.highlighted_index = index;
                if self.selected_skip().map(|s| s.id) != Some(skip.id) {
                    debug!(id = skip.id, size = skip.size, "Skip selected");
                    self.selection.selected = Some(skip);
                }
                Command::None
            }
            Message::Continue => match self.selection.selected.clone() {
                Some(skip) => Command::Exit(SelectionOutcome::Continue(skip)),
                None => {
                    self.ui.message = Some("Select a skip to continue".to_string());
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                }
            },
            Message::Back => Command::Exit(SelectionOutcome::Back),
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Catalog;
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::Quit => Command::Exit(SelectionOutcome::Quit),
        }
    }

    fn accepts_response(&self, id: u64) -> bool {
        id == self.current_request_id && self.catalog.is_loading()
    }
}
