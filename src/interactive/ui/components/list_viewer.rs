use super::list_item::ListItem;
use crate::interactive::constants::PAGE_SIZE;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub marked_index: Option<usize>,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            marked_index: None,
            scroll_offset: 0,
            title,
            empty_message,
        }
    }

    /// Replaces the items. The cursor is reset only when the items actually change.
    pub fn set_items(&mut self, items: &[T]) {
        if self.items.as_slice() == items {
            return;
        }
        self.items = items.to_vec();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.marked_index = None;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn set_marked_index(&mut self, index: Option<usize>) {
        self.marked_index = index.filter(|&i| i < self.items.len());
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    /// Items `[start, end)` that fit in `available_height` rows from the current scroll offset.
    pub fn calculate_visible_range(&self, available_height: u16) -> (usize, usize) {
        let start = self.scroll_offset.min(self.items.len());
        let mut current_height = 0;
        let mut end = start;

        while end < self.items.len() {
            let item_height = self.items[end].height();
            if current_height + item_height > available_height as usize {
                break;
            }
            current_height += item_height;
            end += 1;
        }

        // Always show at least the first item, even if it gets clipped
        if end == start && start < self.items.len() {
            end = start + 1;
        }

        (start, end)
    }

    pub fn adjust_scroll_offset(&mut self, available_height: u16) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
            return;
        }

        loop {
            let (_, end) = self.calculate_visible_range(available_height);
            if self.selected_index < end || self.scroll_offset >= self.selected_index {
                break;
            }
            self.scroll_offset += 1;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty_message, area);
            return;
        }

        let available_height = area.height.saturating_sub(2); // Account for borders
        self.adjust_scroll_offset(available_height);
        let (start, end) = self.calculate_visible_range(available_height);

        let items: Vec<TuiListItem> = (start..end)
            .filter_map(|i| {
                self.items.get(i).map(|item| {
                    let style = if i == self.selected_index {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    TuiListItem::new(item.create_lines(self.marked_index == Some(i))).style(style)
                })
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default());

        f.render_widget(list, area);
    }
}
