use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::pricing::format_price;
use crate::schemas::SkipOption;

/// Trait for items that can be displayed in the generic list viewer
pub trait ListItem: Clone + PartialEq {
    /// Builds the lines of one entry. `marked` is true for the chosen entry.
    fn create_lines(&self, marked: bool) -> Vec<Line<'static>>;

    /// Number of terminal rows the entry takes, including its spacer line.
    fn height(&self) -> usize {
        self.create_lines(false).len()
    }
}

const INDENT: &str = "     ";

impl ListItem for SkipOption {
    fn create_lines(&self, marked: bool) -> Vec<Line<'static>> {
        let marker = if marked {
            Span::styled(
                " ✓ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("   ")
        };

        let mut header = vec![
            Span::raw("  "),
            marker,
            Span::styled(
                format!("{:<14}", self.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<10}", format!("{} Yards", self.size)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:>7}", format_price(self.final_price())),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " inc. VAT & delivery",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if self.is_popular() {
            header.push(Span::styled(
                "  ★ Most popular",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if marked {
            header.push(Span::styled(
                "  Selected",
                Style::default().fg(Color::Green),
            ));
        }

        let mut features = vec![Span::styled(
            format!("{} day hire period", self.hire_period_days),
            Style::default().fg(Color::Blue),
        )];
        if self.allowed_on_road {
            features.push(Span::raw(" · "));
            features.push(Span::styled(
                "Road placement allowed",
                Style::default().fg(Color::Green),
            ));
        }
        if self.allows_heavy_waste {
            features.push(Span::raw(" · "));
            features.push(Span::styled(
                "Heavy waste permitted",
                Style::default().fg(Color::Magenta),
            ));
        }
        features.insert(0, Span::raw(INDENT));

        vec![Line::from(header), Line::from(features), Line::from("")]
    }
}
