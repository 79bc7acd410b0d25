//! TUI view state
//!
//! Presentation-only state: list selection, overlays, flash messages, and
//! the quit flag. Everything with domain meaning lives in the application
//! controller; this struct never outlives a render concern.

use std::time::{Duration, Instant};

/// Presentation state owned by the TUI loop
pub struct UiState {
    // -- Tool picker --
    pub tool_index: usize,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Display options (populated from config at startup) --
    pub show_dots: bool,
    pub flex_threshold: u16,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool_index: 0,
            show_help: false,
            flash_message: None,
            show_dots: true,
            flex_threshold: 90,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Tool picker selection --

    /// Move the picker selection up, stopping at the first entry
    pub fn select_prev(&mut self) {
        self.tool_index = self.tool_index.saturating_sub(1);
    }

    /// Move the picker selection down, stopping at the last entry
    pub fn select_next(&mut self, tool_count: usize) {
        if self.tool_index + 1 < tool_count {
            self.tool_index += 1;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message {
            if created.elapsed() > max_age {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut state = UiState::new();
        state.select_prev();
        assert_eq!(state.tool_index, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.tool_index, 2);
    }

    #[test]
    fn test_select_next_with_empty_list() {
        let mut state = UiState::new();
        state.select_next(0);
        assert_eq!(state.tool_index, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = UiState::new();
        state.set_flash("saved");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        // Expires with a zero max age
        state.expire_flash(Duration::from_millis(0));
        assert!(state.flash_message.is_none());
    }
}
