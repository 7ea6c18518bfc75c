use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Clone, Debug, PartialEq)]
pub enum StatusKind {
    Loading,
    Error(String),
}

/// Placeholder shown instead of the cards while loading or after a failed load.
pub struct StatusView {
    kind: StatusKind,
    tick: usize,
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusView {
    pub fn new() -> Self {
        Self {
            kind: StatusKind::Loading,
            tick: 0,
        }
    }

    pub fn set_kind(&mut self, kind: StatusKind) {
        self.kind = kind;
    }

    fn loading_lines(&self) -> Vec<Line<'static>> {
        let frame = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
        vec![
            Line::from(Span::styled(
                format!("{frame} Loading your skip options..."),
                Styles::title(),
            )),
            Line::from(Span::styled(
                "Finding the perfect waste solution for you",
                Styles::subtitle(),
            )),
        ]
    }

    fn error_lines(message: &str) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Unable to Load Skip Data",
                Style::default()
                    .fg(ColorScheme::ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(ColorScheme::ERROR),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("r", Styles::label()),
                Span::raw(": Try again"),
            ]),
        ]
    }
}

impl Component for StatusView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.tick = self.tick.wrapping_add(1);

        let (lines, border_color) = match &self.kind {
            StatusKind::Loading => (self.loading_lines(), ColorScheme::PRIMARY),
            StatusKind::Error(message) => (Self::error_lines(message), ColorScheme::ERROR),
        };

        // Vertically center the text inside the bordered area
        let padding = (area.height.saturating_sub(2) as usize).saturating_sub(lines.len()) / 2;
        let mut content = vec![Line::from(""); padding];
        content.extend(lines);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match (&self.kind, key.code) {
            (StatusKind::Error(_), KeyCode::Char('r')) => Some(Message::LoadCatalog),
            _ => None,
        }
    }
}
