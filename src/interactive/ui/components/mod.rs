pub mod help_dialog;
pub mod list_item;
pub mod list_viewer;
pub mod skip_list;
pub mod status_view;
pub mod summary_bar;
pub mod view_layout;

#[cfg(test)]
mod list_viewer_test;
#[cfg(test)]
pub(crate) mod test_support;

use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message
        .as_ref()
        .map(|msg| msg == EXIT_PROMPT)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit_prompt() {
        let exit_message = Some("Press Ctrl+C again to exit".to_string());
        assert!(is_exit_prompt(&exit_message));

        let other_message = Some("Some other message".to_string());
        assert!(!is_exit_prompt(&other_message));

        assert!(!is_exit_prompt(&None));

        let empty_message = Some("".to_string());
        assert!(!is_exit_prompt(&empty_message));
    }
}
