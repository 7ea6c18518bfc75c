use crate::interactive::constants::{
    FOOTER_HEIGHT, HEADER_HEIGHT, PAGE_TITLE, SERVICE_FEATURES, SUMMARY_BAR_HEIGHT,
};
use crate::interactive::domain::models::CatalogState;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, is_exit_prompt, skip_list::SkipList,
    status_view::{StatusKind, StatusView}, summary_bar::SummaryBar,
    view_layout::{Styles, ViewLayout},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

pub struct Renderer {
    skip_list: SkipList,
    status_view: StatusView,
    summary_bar: SummaryBar,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            skip_list: SkipList::new(),
            status_view: StatusView::new(),
            summary_bar: SummaryBar::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_catalog_mode(f, state);
        if state.mode == Mode::Help {
            // Help is drawn on top of the catalog
            self.help_dialog.render(f, f.area());
        }
    }

    fn render_catalog_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.summary_bar.set_selection(state.selected_skip().cloned());

        let summary_height = if self.summary_bar.is_visible() {
            SUMMARY_BAR_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),  // Header
                Constraint::Min(0),                 // Cards / status
                Constraint::Length(summary_height), // Summary bar
                Constraint::Length(FOOTER_HEIGHT),  // Shortcuts
            ])
            .split(f.area());

        ViewLayout::new(PAGE_TITLE.to_string())
            .with_subtitle(format!(
                "All prices include VAT and delivery to {}",
                state.location
            ))
            .with_features(&SERVICE_FEATURES)
            .render_header(f, chunks[0]);

        match &state.catalog {
            CatalogState::NotLoaded | CatalogState::Loading => {
                self.status_view.set_kind(StatusKind::Loading);
                self.status_view.render(f, chunks[1]);
            }
            CatalogState::Errored(message) => {
                self.status_view.set_kind(StatusKind::Error(message.clone()));
                self.status_view.render(f, chunks[1]);
            }
            CatalogState::Loaded(skips) => {
                self.skip_list.set_skips(skips);
                self.skip_list
                    .set_highlighted_index(state.selection.highlighted_index);
                self.skip_list
                    .set_selected_id(state.selected_skip().map(|s| s.id));
                self.skip_list.render(f, chunks[1]);
            }
        }

        if self.summary_bar.is_visible() {
            self.summary_bar.render(f, chunks[2]);
        }

        self.render_footer(f, chunks[3], state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let footer = match &state.ui.message {
            Some(message) => {
                let style = if is_exit_prompt(&state.ui.message) {
                    Styles::warning()
                } else {
                    Styles::label()
                };
                Paragraph::new(message.clone()).style(style)
            }
            None => Paragraph::new(Self::shortcuts(&state.catalog)).style(Styles::dimmed()),
        };
        f.render_widget(footer.alignment(Alignment::Center), area);
    }

    pub fn shortcuts(catalog: &CatalogState) -> &'static str {
        match catalog {
            CatalogState::NotLoaded | CatalogState::Loading => "Esc: Back | q: Quit",
            CatalogState::Errored(_) => "r: Try again | Esc: Back | q: Quit | ?: Help",
            CatalogState::Loaded(_) => {
                "↑/↓: Navigate | Enter: Select | c: Continue | r: Reload | Esc: Back | q: Quit | ?: Help"
            }
        }
    }

    pub fn get_skip_list_mut(&mut self) -> &mut SkipList {
        &mut self.skip_list
    }

    pub fn get_status_view_mut(&mut self) -> &mut StatusView {
        &mut self.status_view
    }

    pub fn get_summary_bar_mut(&mut self) -> &mut SummaryBar {
        &mut self.summary_bar
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
