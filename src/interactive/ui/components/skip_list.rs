use crate::interactive::ui::components::{Component, list_viewer::ListViewer};
use crate::interactive::ui::events::Message;
use crate::schemas::SkipOption;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

/// Selectable cards, one per skip in the catalog.
pub struct SkipList {
    list_viewer: ListViewer<SkipOption>,
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new(
                "Skips".to_string(),
                "No skips available for this location".to_string(),
            ),
        }
    }

    pub fn set_skips(&mut self, skips: &[SkipOption]) {
        self.list_viewer.set_items(skips);
    }

    pub fn set_highlighted_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    /// Marks the card of the chosen skip, matched by id.
    pub fn set_selected_id(&mut self, id: Option<u64>) {
        let index = id.and_then(|id| self.list_viewer.items.iter().position(|s| s.id == id));
        self.list_viewer.set_marked_index(index);
    }

    pub fn highlighted_skip(&self) -> Option<&SkipOption> {
        self.list_viewer.get_selected_item()
    }

    pub fn highlighted_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    pub fn card_count(&self) -> usize {
        self.list_viewer.items_count()
    }

    fn highlight(moved: bool, index: usize) -> Option<Message> {
        if moved {
            Some(Message::HighlightSkip(index))
        } else {
            None
        }
    }
}

impl Component for SkipList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.list_viewer.render(f, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let moved = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list_viewer.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.list_viewer.move_down(),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_up()
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_down()
            }
            KeyCode::PageUp => self.list_viewer.page_up(),
            KeyCode::PageDown => self.list_viewer.page_down(),
            KeyCode::Home => self.list_viewer.move_to_start(),
            KeyCode::End => self.list_viewer.move_to_end(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return if self.list_viewer.items_count() > 0 {
                    Some(Message::SelectSkip(self.list_viewer.selected_index()))
                } else {
                    None
                };
            }
            _ => return None,
        };
        Self::highlight(moved, self.list_viewer.selected_index())
    }
}
