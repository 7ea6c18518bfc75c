#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::catalog::Location;
    use crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS;
    use crate::interactive::domain::models::{CatalogState, FetchRequest, SelectionOutcome};
    use crate::schemas::SkipOption;

    fn create_test_skip(id: u64, size: u32) -> SkipOption {
        SkipOption {
            id,
            size,
            price_before_vat: 211.0,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: true,
            allows_heavy_waste: false,
        }
    }

    fn create_test_catalog() -> Vec<SkipOption> {
        vec![
            create_test_skip(10, 4),
            create_test_skip(11, 6),
            create_test_skip(12, 8),
        ]
    }

    /// State with a catalog already loaded through the normal message flow.
    fn create_loaded_state() -> AppState {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);
        let id = state.current_request_id;
        state.update(Message::CatalogLoaded(id, create_test_catalog()));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();

        assert_eq!(state.mode, Mode::Catalog);
        assert_eq!(state.catalog, CatalogState::NotLoaded);
        assert_eq!(state.location, Location::default());
        assert_eq!(state.current_request_id, 0);
        assert!(state.selected_skip().is_none());
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_load_catalog_starts_fetch_for_location() {
        let mut state = AppState::new(Location::new("IP1", "Ipswich"));

        let command = state.update(Message::LoadCatalog);

        assert!(state.catalog.is_loading());
        assert_eq!(
            command,
            Command::FetchCatalog(FetchRequest {
                id: 1,
                location: Location::new("IP1", "Ipswich"),
            })
        );
    }

    #[test]
    fn test_load_catalog_ignored_while_loading() {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);

        let command = state.update(Message::LoadCatalog);

        assert_eq!(command, Command::None);
        assert_eq!(state.current_request_id, 1);
    }

    #[test]
    fn test_catalog_loaded() {
        let state = create_loaded_state();

        assert!(!state.catalog.is_loading());
        assert_eq!(state.catalog.skips().len(), 3);
        assert!(state.catalog.error().is_none());
        assert_eq!(state.selection.highlighted_index, 0);
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);
        state.update(Message::CatalogLoaded(1, Vec::new()));

        assert_eq!(state.catalog, CatalogState::Loaded(Vec::new()));
        assert!(state.catalog.error().is_none());
        assert!(state.catalog.skips().is_empty());
    }

    #[test]
    fn test_catalog_failed_ends_loading_and_suppresses_catalog() {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);

        let command = state.update(Message::CatalogFailed(
            1,
            "Failed to fetch skip data (500)".to_string(),
        ));

        assert_eq!(command, Command::None);
        assert!(!state.catalog.is_loading());
        assert_eq!(state.catalog.error(), Some("Failed to fetch skip data (500)"));
        assert!(state.catalog.skips().is_empty());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);
        state.update(Message::CatalogFailed(1, "timeout".to_string()));
        state.update(Message::LoadCatalog);
        assert_eq!(state.current_request_id, 2);

        // A late answer to the first request must not land
        state.update(Message::CatalogLoaded(1, create_test_catalog()));
        assert!(state.catalog.is_loading());

        state.update(Message::CatalogLoaded(2, create_test_catalog()));
        assert_eq!(state.catalog.skips().len(), 3);
    }

    #[test]
    fn test_response_without_pending_request_is_ignored() {
        let mut state = create_loaded_state();

        state.update(Message::CatalogFailed(1, "late failure".to_string()));

        assert_eq!(state.catalog.skips().len(), 3);
        assert!(state.catalog.error().is_none());
    }

    #[test]
    fn test_retry_from_error_resets_to_loading() {
        let mut state = AppState::default();
        state.update(Message::LoadCatalog);
        state.update(Message::CatalogFailed(1, "offline".to_string()));

        let command = state.update(Message::LoadCatalog);

        assert!(state.catalog.is_loading());
        assert!(state.catalog.error().is_none());
        assert!(matches!(command, Command::FetchCatalog(FetchRequest { id: 2, .. })));
    }

    #[test]
    fn test_select_skip() {
        let mut state = create_loaded_state();

        let command = state.update(Message::SelectSkip(1));

        assert_eq!(command, Command::None);
        assert_eq!(state.selected_skip().map(|s| s.id), Some(11));
        assert_eq!(state.selection.highlighted_index, 1);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut state = create_loaded_state();

        state.update(Message::SelectSkip(0));
        state.update(Message::SelectSkip(2));

        assert_eq!(state.selected_skip().map(|s| s.id), Some(12));
    }

    #[test]
    fn test_select_same_skip_is_idempotent() {
        let mut state = create_loaded_state();

        state.update(Message::SelectSkip(1));
        let before = state.selected_skip().cloned();
        state.update(Message::SelectSkip(1));

        assert_eq!(state.selected_skip().cloned(), before);
        assert_eq!(state.selected_skip().map(|s| s.id), Some(11));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = create_loaded_state();
        state.update(Message::SelectSkip(0));

        state.update(Message::SelectSkip(3));

        assert_eq!(state.selected_skip().map(|s| s.id), Some(10));
        assert_eq!(state.selection.highlighted_index, 0);
    }

    #[test]
    fn test_select_before_load_is_ignored() {
        let mut state = AppState::default();
        state.update(Message::SelectSkip(0));
        assert!(state.selected_skip().is_none());
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut state = create_loaded_state();
        state.update(Message::SelectSkip(2));

        state.update(Message::LoadCatalog);

        assert!(state.selected_skip().is_none());
        assert_eq!(state.selection.highlighted_index, 0);
    }

    #[test]
    fn test_highlight_bounds() {
        let mut state = create_loaded_state();

        state.update(Message::HighlightSkip(2));
        assert_eq!(state.selection.highlighted_index, 2);

        state.update(Message::HighlightSkip(3));
        assert_eq!(state.selection.highlighted_index, 2);

        // Highlighting never selects
        assert!(state.selected_skip().is_none());
    }

    #[test]
    fn test_continue_with_selection_exits() {
        let mut state = create_loaded_state();
        state.update(Message::SelectSkip(2));

        let command = state.update(Message::Continue);

        assert_eq!(
            command,
            Command::Exit(SelectionOutcome::Continue(create_test_skip(12, 8)))
        );
    }

    #[test]
    fn test_continue_without_selection_shows_message() {
        let mut state = create_loaded_state();

        let command = state.update(Message::Continue);

        assert_eq!(command, Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
        assert_eq!(state.ui.message, Some("Select a skip to continue".to_string()));
    }

    #[test]
    fn test_back_and_quit() {
        let mut state = create_loaded_state();
        assert_eq!(
            state.update(Message::Back),
            Command::Exit(SelectionOutcome::Back)
        );
        assert_eq!(
            state.update(Message::Quit),
            Command::Exit(SelectionOutcome::Quit)
        );
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut state = AppState::default();

        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);

        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Catalog);
    }

    #[test]
    fn test_status_messages() {
        let mut state = AppState::default();

        let command = state.update(Message::SetStatus("Hello".to_string()));
        assert_eq!(state.ui.message, Some("Hello".to_string()));
        assert_eq!(command, Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
    }
}
