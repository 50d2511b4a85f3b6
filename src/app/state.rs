use std::time::Instant;

use crate::page::Section;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewMode {
    Assets,
    Favorites,
}

impl ViewMode {
    pub fn section(&self) -> Section {
        match self {
            ViewMode::Assets => Section::Assets,
            ViewMode::Favorites => Section::Favorites,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ViewMode::Assets => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Assets,
        }
    }
}

/// Cursor position in a list view
#[derive(Default)]
pub struct ListState {
    pub selected: usize,
}

impl ListState {
    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[derive(Default)]
pub struct HelpState {
    pub scroll_offset: usize,
}

/// Transient status bar message
pub struct StatusMessage {
    pub message: String,
    pub is_error: bool,
    pub timestamp: Instant,
}

/// Last time each background job ran
pub struct SyncTimers {
    pub last_count_poll: Instant,
    pub last_resync: Instant,
}

impl SyncTimers {
    pub fn new(now: Instant) -> Self {
        Self {
            last_count_poll: now,
            last_resync: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_bounds() {
        let mut list = ListState::default();
        list.move_up();
        assert_eq!(list.selected, 0);

        list.move_down(2);
        list.move_down(2);
        assert_eq!(list.selected, 1);

        list.clamp(0);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::Assets.next(), ViewMode::Favorites);
        assert_eq!(ViewMode::Favorites.next().section(), Section::Assets);
    }
}
