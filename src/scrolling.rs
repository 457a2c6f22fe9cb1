//! Scrollable list cursor
//!
//! Tracks the selected index of a list together with the window of items
//! that fits on screen, keeping the selection visible as it moves.

/// Selection and viewport for a list of `total` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the selected item
    pub selected_index: usize,
    /// Index of the first visible item
    pub scroll_offset: usize,
    /// Number of items in the list
    pub total_items: usize,
    /// Number of items that fit on screen
    pub visible_items: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

impl ScrollState {
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            selected_index: 0,
            scroll_offset: 0,
            total_items,
            visible_items: visible_items.max(1),
        }
    }

    /// Move selection up by one item
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.keep_visible();
        }
    }

    /// Move selection down by one item
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.total_items {
            self.selected_index += 1;
            self.keep_visible();
        }
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.visible_items);
        self.keep_visible();
    }

    pub fn page_down(&mut self) {
        if self.total_items == 0 {
            return;
        }
        self.selected_index = (self.selected_index + self.visible_items).min(self.total_items - 1);
        self.keep_visible();
    }

    pub fn move_to_first(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn move_to_last(&mut self) {
        self.selected_index = self.total_items.saturating_sub(1);
        self.keep_visible();
    }

    /// Update the viewport height, e.g. after a resize
    pub fn update_visible_items(&mut self, visible_items: usize) {
        self.visible_items = visible_items.max(1);
        self.keep_visible();
    }

    /// Update the list length, clamping the selection into range
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.selected_index >= total_items {
            self.selected_index = total_items.saturating_sub(1);
        }
        self.keep_visible();
    }

    /// Range of item indices currently on screen
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.scroll_offset + self.visible_items).min(self.total_items);
        self.scroll_offset.min(end)..end
    }

    fn keep_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + self.visible_items {
            self.scroll_offset = self.selected_index + 1 - self.visible_items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down_stops_at_end() {
        let mut scroll = ScrollState::new(3, 10);
        scroll.move_down();
        scroll.move_down();
        scroll.move_down();
        assert_eq!(scroll.selected_index, 2);
    }

    #[test]
    fn test_move_up_stops_at_start() {
        let mut scroll = ScrollState::new(3, 10);
        scroll.move_up();
        assert_eq!(scroll.selected_index, 0);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let mut scroll = ScrollState::new(20, 5);
        for _ in 0..7 {
            scroll.move_down();
        }
        assert_eq!(scroll.selected_index, 7);
        assert_eq!(scroll.scroll_offset, 3);
        assert_eq!(scroll.visible_range(), 3..8);

        scroll.move_to_first();
        assert_eq!(scroll.visible_range(), 0..5);
    }

    #[test]
    fn test_page_navigation() {
        let mut scroll = ScrollState::new(12, 5);
        scroll.page_down();
        assert_eq!(scroll.selected_index, 5);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.selected_index, 11);
        scroll.page_up();
        assert_eq!(scroll.selected_index, 6);
    }

    #[test]
    fn test_empty_list() {
        let mut scroll = ScrollState::new(0, 5);
        scroll.move_down();
        scroll.page_down();
        scroll.move_to_last();
        assert_eq!(scroll.selected_index, 0);
        assert_eq!(scroll.visible_range(), 0..0);
    }

    #[test]
    fn test_set_total_clamps_selection() {
        let mut scroll = ScrollState::new(10, 5);
        scroll.move_to_last();
        scroll.set_total_items(4);
        assert_eq!(scroll.selected_index, 3);
    }
}
