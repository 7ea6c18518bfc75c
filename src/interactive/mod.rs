use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::catalog::{CatalogSource, Location};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::catalog_service::CatalogService;
use self::constants::*;
pub use self::domain::models::SelectionOutcome;
use self::domain::models::{CatalogState, FetchRequest, FetchResponse, Mode};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, status_view::StatusKind},
    events::Message,
    renderer::Renderer,
};

/// The interactive "choose your skip size" screen.
pub struct SkipSelection {
    state: AppState,
    renderer: Renderer,
    catalog_service: Arc<CatalogService>,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    outcome: Option<SelectionOutcome>,
}

impl SkipSelection {
    pub fn new(source: Arc<dyn CatalogSource>, location: Location) -> Self {
        Self {
            state: AppState::new(location),
            renderer: Renderer::new(),
            catalog_service: Arc::new(CatalogService::new(source)),
            fetch_sender: None,
            fetch_receiver: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            outcome: None,
        }
    }

    pub fn run(&mut self) -> Result<SelectionOutcome> {
        let mut terminal = self.setup_terminal()?;

        self.start();
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    /// Starts the fetch worker and issues the initial catalog load.
    pub(crate) fn start(&mut self) {
        let (tx, rx) = self.start_fetch_worker();
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        info!(location = %self.state.location, "Skip selection started");
        self.handle_message(Message::LoadCatalog);
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<SelectionOutcome> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.poll_fetch_response();

            self.clear_expired_message();

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }

            if let Some(outcome) = self.outcome.take() {
                info!(?outcome, "Skip selection finished");
                return Ok(outcome);
            }
        }
    }

    pub(crate) fn clear_expired_message(&mut self) {
        if let Some(timer) = self.message_timer {
            if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                self.execute_command(Command::ClearMessage);
            }
        }
    }

    /// Applies a finished fetch, if one is waiting. Returns true when a response was handled.
    pub(crate) fn poll_fetch_response(&mut self) -> bool {
        let response = self
            .fetch_receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());

        match response {
            Some(response) => {
                let msg = match response.result {
                    Ok(skips) => Message::CatalogLoaded(response.id, skips),
                    Err(error) => Message::CatalogFailed(response.id, error),
                };
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return;
        }

        if key.code == KeyCode::Char('?') && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return;
        }

        let message = match self.state.mode {
            Mode::Catalog => self.handle_catalog_mode_input(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_catalog_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Char('c') | KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => {
                return self.renderer.get_summary_bar_mut().handle_key(key);
            }
            _ => {}
        }

        match &self.state.catalog {
            CatalogState::Loaded(skips) => {
                if key.code == KeyCode::Char('r') {
                    return Some(Message::LoadCatalog);
                }
                // Keep the list in step with the state before it interprets the key
                let skip_list = self.renderer.get_skip_list_mut();
                skip_list.set_skips(skips);
                skip_list.set_highlighted_index(self.state.selection.highlighted_index);
                skip_list.handle_key(key)
            }
            CatalogState::Errored(message) => {
                // The view may not have been drawn since the failure arrived
                let status_view = self.renderer.get_status_view_mut();
                status_view.set_kind(StatusKind::Error(message.clone()));
                status_view.handle_key(key)
            }
            CatalogState::Loading if key.code == KeyCode::Char('r') => Some(Message::SetStatus(
                "Skip options are still loading".to_string(),
            )),
            CatalogState::NotLoaded | CatalogState::Loading => None,
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchCatalog(request) => {
                self.request_fetch(request);
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Exit(outcome) => {
                self.outcome = Some(outcome);
            }
        }
    }

    fn request_fetch(&mut self, request: FetchRequest) {
        debug!(id = request.id, "Queueing catalog fetch");
        let sent = self
            .fetch_sender
            .as_ref()
            .map(|sender| sender.send(request.clone()).is_ok())
            .unwrap_or(false);

        if !sent {
            self.handle_message(Message::CatalogFailed(
                request.id,
                "Catalog loader is not running".to_string(),
            ));
        }
    }

    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let catalog_service = self.catalog_service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = catalog_service.fetch(request);
                if response_tx.send(response).is_err() {
                    // Screen is gone; nobody will read the result
                    break;
                }
            }
        });

        (request_tx, response_rx)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn take_outcome(&mut self) -> Option<SelectionOutcome> {
        self.outcome.take()
    }
}
