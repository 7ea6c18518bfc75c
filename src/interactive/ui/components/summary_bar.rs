use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles};
use crate::interactive::ui::events::Message;
use crate::pricing::format_price;
use crate::schemas::SkipOption;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Bar pinned under the cards once a skip has been chosen.
#[derive(Default)]
pub struct SummaryBar {
    selection: Option<SkipOption>,
}

impl SummaryBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selection(&mut self, selection: Option<SkipOption>) {
        self.selection = selection;
    }

    pub fn is_visible(&self) -> bool {
        self.selection.is_some()
    }
}

impl Component for SummaryBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(skip) = &self.selection else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ColorScheme::SECONDARY));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(inner);

        let summary = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} selected", skip.title()),
                Styles::title(),
            )),
            Line::from(Span::styled(
                format!("{} inc. VAT", format_price(skip.final_price())),
                Style::default().fg(ColorScheme::SECONDARY),
            )),
        ]);
        f.render_widget(summary, chunks[0]);

        let actions = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Esc", Styles::label()),
                Span::raw(": Back  "),
                Span::styled("c", Styles::label()),
                Span::raw(": Continue to booking"),
            ]),
            Line::from(""),
        ])
        .alignment(Alignment::Right);
        f.render_widget(actions, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('c') => Some(Message::Continue),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => Some(Message::Back),
            _ => None,
        }
    }
}
