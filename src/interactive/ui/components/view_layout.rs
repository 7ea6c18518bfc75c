use crate::interactive::constants::{CHECKOUT_STEP, CHECKOUT_STEP_COUNT};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Checkout steps up to and including this screen.
const CHECKOUT_STEPS: [&str; CHECKOUT_STEP] = ["Postcode", "Waste Type", "Select Skip"];

/// Page header: checkout breadcrumb, title and location.
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    features: Vec<&'static str>,
}

impl ViewLayout {
    pub fn new(title: String) -> Self {
        Self {
            title,
            subtitle: None,
            features: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_features(mut self, features: &[&'static str]) -> Self {
        self.features = features.to_vec();
        self
    }

    /// Selling points joined into one strip, or `None` when there are none.
    pub fn feature_strip(&self) -> Option<Line<'static>> {
        if self.features.is_empty() {
            return None;
        }
        let mut spans = Vec::new();
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Styles::dimmed()));
            }
            spans.push(Span::styled(*feature, Style::default().fg(ColorScheme::SUCCESS)));
        }
        Some(Line::from(spans))
    }

    /// Done steps, the current step, then "Step n of m".
    pub fn breadcrumb() -> Line<'static> {
        let mut spans = Vec::new();
        for (i, step) in CHECKOUT_STEPS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", Styles::dimmed()));
            }
            let position = i + 1;
            if position < CHECKOUT_STEP {
                spans.push(Span::styled(
                    format!("✓ {step}"),
                    Style::default().fg(ColorScheme::SUCCESS),
                ));
            } else {
                spans.push(Span::styled(
                    format!("● {step}"),
                    Style::default()
                        .fg(ColorScheme::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
        spans.push(Span::styled(
            format!("   Step {CHECKOUT_STEP} of {CHECKOUT_STEP_COUNT}"),
            Styles::dimmed(),
        ));
        Line::from(spans)
    }

    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Self::breadcrumb(),
            Line::from(vec![Span::styled(self.title.clone(), Styles::title())]),
        ];

        if let Some(ref subtitle) = self.subtitle {
            lines.push(Line::from(vec![Span::styled(
                subtitle.clone(),
                Styles::subtitle(),
            )]));
        }

        if let Some(strip) = self.feature_strip() {
            lines.push(strip);
        }

        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Left);

        f.render_widget(header, area);
    }
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}
