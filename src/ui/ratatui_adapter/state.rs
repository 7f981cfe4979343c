//! Application state for the ratatui TUI
//!
//! Wraps the [`SelectionState`] with what only the terminal needs: the
//! dropdown cursor and scroll offset, the caret inside the query, the
//! overlay mode and transient status messages.

use super::widgets::KeyHint;
use crate::horoscope::{HoroscopeDate, HoroscopeRequest, HoroscopeResponse};
use crate::riders::RiderDirectory;
use crate::selection::SelectionState;
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the selection view
#[derive(Debug)]
pub struct AppState {
    /// Query, candidates, selection and horoscope
    pub selection: SelectionState,
    /// Current cursor position in the candidate list
    pub cursor: usize,
    /// Scroll offset for the candidate list
    pub scroll_offset: usize,
    /// Scroll offset of the horoscope panel, in lines
    pub panel_scroll: u16,
    /// Caret position within the query string (byte offset)
    pub query_cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the application should exit
    pub should_exit: bool,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Hints for the bottom bar
    pub hints: Vec<KeyHint>,
}

impl AppState {
    /// Create new application state over a directory
    #[must_use]
    pub fn new(directory: RiderDirectory, hints: Vec<KeyHint>) -> Self {
        Self {
            selection: SelectionState::new(directory),
            cursor: 0,
            scroll_offset: 0,
            panel_scroll: 0,
            query_cursor: 0,
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            visible_height: 20, // Default, updated during render
            hints,
        }
    }

    /// The current query
    #[must_use]
    pub fn query(&self) -> &str {
        self.selection.query()
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.selection.candidate_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.selection.candidate_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Scroll the horoscope panel up one line
    pub fn panel_scroll_up(&mut self) {
        self.panel_scroll = self.panel_scroll.saturating_sub(1);
    }

    /// Scroll the horoscope panel down one line
    pub fn panel_scroll_down(&mut self) {
        self.panel_scroll = self.panel_scroll.saturating_add(1);
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Clamp cursor and scroll after the candidate list changed
    fn reset_list(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Position the cursor on the selected rider if it is a candidate
    fn cursor_to_selected(&mut self) {
        let Some(selected) = self.selection.selected() else {
            return;
        };
        let id = selected.id.clone();
        let found = self.selection.candidates().position(|r| r.id == id);
        if let Some(pos) = found {
            self.cursor = pos;
            self.adjust_scroll();
        }
    }

    fn apply_query(&mut self, query: String, caret: usize) {
        self.selection.set_query(query);
        self.query_cursor = caret.min(self.selection.query().len());
        self.reset_list();
    }

    /// Insert a character at the caret
    pub fn query_push(&mut self, c: char) {
        let mut query = self.query().to_string();
        query.insert(self.query_cursor, c);
        let caret = self.query_cursor + c.len_utf8();
        self.apply_query(query, caret);
    }

    /// Remove the character before the caret; returns whether anything changed
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let mut query = self.query().to_string();
        let prev = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev);
        self.apply_query(query, prev);
        true
    }

    /// Remove the character under the caret; returns whether anything changed
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query().len() {
            return false;
        }
        let mut query = self.query().to_string();
        query.remove(self.query_cursor);
        let caret = self.query_cursor;
        self.apply_query(query, caret);
        true
    }

    /// Delete the word before the caret
    pub fn query_delete_word(&mut self) {
        let query = self.query().to_string();
        let head = query[..self.query_cursor].trim_end();
        let start = head.rfind(' ').map_or(0, |i| i + 1);
        let mut edited = query[..start].to_string();
        edited.push_str(&query[self.query_cursor..]);
        self.apply_query(edited, start);
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.apply_query(String::new(), 0);
    }

    /// Move query caret left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query()[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query caret right
    pub fn query_cursor_right(&mut self) {
        let query = self.selection.query();
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Move query caret to the start
    pub fn query_cursor_home(&mut self) {
        self.query_cursor = 0;
    }

    /// Move query caret to the end
    pub fn query_cursor_end(&mut self) {
        self.query_cursor = self.query().len();
    }

    /// Select the highlighted candidate for `date`
    ///
    /// The query is replaced by the rider's name and the caret moves to its
    /// end. Returns the lookup to queue, if the selection changed.
    pub fn select_current(&mut self, date: HoroscopeDate) -> Option<HoroscopeRequest> {
        let request = self.selection.select(self.cursor, date);
        self.query_cursor = self.selection.query().len();
        self.reset_list();
        self.cursor_to_selected();
        if request.is_some() {
            self.panel_scroll = 0;
        }
        request
    }

    /// Feed a worker response into the selection
    pub fn apply_response(&mut self, response: HoroscopeResponse) -> bool {
        let applied = self.selection.apply_response(response);
        if applied {
            self.panel_scroll = 0;
        }
        applied
    }

    /// Swap in a freshly loaded directory
    pub fn replace_directory(&mut self, directory: RiderDirectory) {
        let count = directory.len();
        self.selection.replace_directory(directory);
        self.reset_list();
        self.cursor_to_selected();
        self.add_message(MessageLevel::Info, format!("Rider list updated ({count} riders)"));
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    /// Request exit
    pub fn quit(&mut self) {
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riders::{DirectorySource, Rider};
    use crate::selection::PanelView;
    use chrono::NaiveDate;

    fn make_state(n: usize) -> AppState {
        let riders = (0..n)
            .map(|i| Rider::new(&format!("rider {i:02}"), "Leo"))
            .collect();
        AppState::new(RiderDirectory::new(riders, DirectorySource::Bundled), Vec::new())
    }

    fn day() -> HoroscopeDate {
        HoroscopeDate::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
    }

    #[test]
    fn test_cursor_movement_and_scroll() {
        let mut state = make_state(30);
        state.visible_height = 10;

        for _ in 0..12 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 12);
        assert_eq!(state.scroll_offset, 3);

        state.page_up();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.scroll_offset, 2);

        state.page_down();
        state.page_down();
        state.page_down();
        assert_eq!(state.cursor, 29);

        state.cursor_down();
        assert_eq!(state.cursor, 29);
    }

    #[test]
    fn test_query_editing_filters() {
        let mut state = make_state(30);
        state.query_push('1');
        state.query_push('5');
        assert_eq!(state.query(), "15");
        assert_eq!(state.selection.candidate_count(), 1);

        assert!(state.query_backspace());
        assert_eq!(state.query(), "1");
        // 01, 10..=19 and 21
        assert_eq!(state.selection.candidate_count(), 12);

        state.query_cursor_left();
        assert!(!state.query_backspace());
        assert!(state.query_delete());
        assert_eq!(state.query(), "");
        assert_eq!(state.selection.candidate_count(), 30);
    }

    #[test]
    fn test_query_caret_handles_multibyte() {
        let mut state = make_state(1);
        state.query_push('č');
        state.query_push('a');
        assert_eq!(state.query_cursor, 3);
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 2);
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);
        state.query_cursor_right();
        assert_eq!(state.query_cursor, 2);
        state.query_cursor_end();
        assert!(state.query_backspace());
        assert_eq!(state.query(), "č");
    }

    #[test]
    fn test_delete_word() {
        let mut state = make_state(1);
        for c in "rider 0".chars() {
            state.query_push(c);
        }
        state.query_delete_word();
        assert_eq!(state.query(), "rider ");
        state.query_delete_word();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_select_current_replaces_query() {
        let mut state = make_state(5);
        state.cursor_down();
        state.cursor_down();

        let request = state.select_current(day()).unwrap();
        assert_eq!(request.rider.name, "Rider 02");
        assert_eq!(state.query(), "Rider 02");
        assert_eq!(state.query_cursor, "Rider 02".len());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.selection.panel(), PanelView::Loading);
    }

    #[test]
    fn test_panel_scroll_resets_on_new_selection() {
        let mut state = make_state(3);
        state.panel_scroll_up();
        assert_eq!(state.panel_scroll, 0);
        state.panel_scroll_down();
        state.panel_scroll_down();
        assert_eq!(state.panel_scroll, 2);

        state.select_current(day()).unwrap();
        assert_eq!(state.panel_scroll, 0);
    }

    #[test]
    fn test_reselect_keeps_query_in_sync() {
        let mut state = make_state(3);
        state.select_current(day()).unwrap();
        state.query_clear();
        state.query_push('0');

        assert!(state.select_current(day()).is_none());
        assert_eq!(state.query(), "Rider 00");
        assert_eq!(state.query_cursor, "Rider 00".len());
    }

    #[test]
    fn test_select_on_empty_list_is_noop() {
        let mut state = make_state(3);
        state.query_push('x');
        assert!(state.select_current(day()).is_none());
        assert_eq!(state.selection.panel(), PanelView::Idle);
    }

    #[test]
    fn test_replace_directory_adds_message() {
        let mut state = make_state(3);
        state.replace_directory(RiderDirectory::new(
            vec![Rider::new("anna lee", "Leo")],
            DirectorySource::Remote,
        ));
        assert_eq!(state.selection.candidate_count(), 1);
        assert_eq!(state.active_messages().len(), 1);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = make_state(1);
        state.message_ttl = Duration::from_millis(10);
        state.add_message(MessageLevel::Info, "hello".to_string());
        std::thread::sleep(Duration::from_millis(30));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_toggle_help() {
        let mut state = make_state(1);
        state.toggle_help();
        assert_eq!(state.mode, Mode::Help);
        state.toggle_help();
        assert_eq!(state.mode, Mode::Normal);
    }
}
