#[cfg(test)]
mod tests {
    use super::super::list_viewer::ListViewer;
    use super::super::test_support::create_test_catalog;
    use crate::schemas::SkipOption;

    fn viewer_with(count: usize) -> ListViewer<SkipOption> {
        let mut viewer = ListViewer::new("Skips".to_string(), "Empty".to_string());
        viewer.set_items(&create_test_catalog(count));
        viewer
    }

    #[test]
    fn test_set_items_resets_cursor_only_on_change() {
        let catalog = create_test_catalog(4);
        let mut viewer: ListViewer<SkipOption> = ListViewer::default();
        viewer.set_items(&catalog);
        viewer.set_selected_index(2);
        viewer.set_marked_index(Some(2));

        // Same items again: cursor and mark survive
        viewer.set_items(&catalog);
        assert_eq!(viewer.selected_index(), 2);
        assert_eq!(viewer.marked_index, Some(2));

        // Different items: both reset
        viewer.set_items(&create_test_catalog(3));
        assert_eq!(viewer.selected_index(), 0);
        assert_eq!(viewer.marked_index, None);
    }

    #[test]
    fn test_set_selected_index_bounds() {
        let mut viewer = viewer_with(3);
        viewer.set_selected_index(5);
        assert_eq!(viewer.selected_index(), 0);
        viewer.set_selected_index(2);
        assert_eq!(viewer.get_selected_item().map(|s| s.id), Some(102));
    }

    #[test]
    fn test_marked_index_bounds() {
        let mut viewer = viewer_with(2);
        viewer.set_marked_index(Some(2));
        assert_eq!(viewer.marked_index, None);
        viewer.set_marked_index(Some(1));
        assert_eq!(viewer.marked_index, Some(1));
    }

    #[test]
    fn test_move_up_down() {
        let mut viewer = viewer_with(2);
        assert!(!viewer.move_up());
        assert!(viewer.move_down());
        assert!(!viewer.move_down());
        assert_eq!(viewer.selected_index(), 1);
        assert!(viewer.move_up());
        assert_eq!(viewer.selected_index(), 0);
    }

    #[test]
    fn test_page_navigation() {
        let mut viewer = viewer_with(12);
        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 5);
        assert!(viewer.page_down());
        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 11);
        assert!(!viewer.page_down());
        assert!(viewer.page_up());
        assert_eq!(viewer.selected_index(), 6);
    }

    #[test]
    fn test_start_end() {
        let mut viewer = viewer_with(4);
        assert!(!viewer.move_to_start());
        assert!(viewer.move_to_end());
        assert_eq!(viewer.selected_index(), 3);
        assert!(!viewer.move_to_end());
        assert!(viewer.move_to_start());
        assert_eq!(viewer.scroll_offset, 0);
    }

    #[test]
    fn test_empty_viewer_navigation() {
        let mut viewer = viewer_with(0);
        assert!(!viewer.move_down());
        assert!(!viewer.page_down());
        assert!(!viewer.move_to_end());
        assert!(viewer.get_selected_item().is_none());
    }

    #[test]
    fn test_visible_range_and_scrolling() {
        // Every card is three rows tall
        let mut viewer = viewer_with(10);
        assert_eq!(viewer.calculate_visible_range(9), (0, 3));
        assert_eq!(viewer.calculate_visible_range(10), (0, 3));

        viewer.set_selected_index(5);
        viewer.adjust_scroll_offset(9);
        assert_eq!(viewer.scroll_offset, 3);
        assert_eq!(viewer.calculate_visible_range(9), (3, 6));

        viewer.set_selected_index(1);
        viewer.adjust_scroll_offset(9);
        assert_eq!(viewer.scroll_offset, 1);
    }

    #[test]
    fn test_visible_range_too_small_still_shows_one() {
        let viewer = viewer_with(3);
        assert_eq!(viewer.calculate_visible_range(1), (0, 1));
    }
}
