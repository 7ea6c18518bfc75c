use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH, PAGE_TITLE};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![Span::styled(
                PAGE_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled("Skips:", heading)]),
            Line::from("  ↑/↓ or j/k  - Move between skips"),
            Line::from("  PgUp/PgDn   - Jump five skips"),
            Line::from("  Home/End    - First/last skip"),
            Line::from("  Enter/Space - Select the highlighted skip"),
            Line::from(""),
            Line::from(vec![Span::styled("Actions:", heading)]),
            Line::from("  c           - Continue with the selected skip"),
            Line::from("  Esc/b       - Back to waste type"),
            Line::from("  r           - Reload the skip list"),
            Line::from("  q           - Quit"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Prices include VAT and delivery."),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        let dialog_area = Rect::new(x, y, width, height);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
