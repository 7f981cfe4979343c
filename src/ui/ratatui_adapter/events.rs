//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto [`AppState`] edits.

use super::state::{AppState, Mode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The query changed and candidates were recomputed
    QueryChanged,
    /// Select the highlighted candidate
    Select,
    /// Leave the application
    Quit,
    /// No action taken
    Ignored,
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            if state.query().is_empty() {
                EventResult::Quit
            } else {
                state.query_clear();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Enter, _) => EventResult::Select,

        // Horoscope panel
        (KeyCode::Up, KeyModifiers::SHIFT) => {
            state.panel_scroll_up();
            EventResult::Continue
        }
        (KeyCode::Down, KeyModifiers::SHIFT) => {
            state.panel_scroll_down();
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.toggle_help();
            EventResult::Continue
        }
        (KeyCode::Char('?'), _) if state.query().is_empty() => {
            state.toggle_help();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::QueryChanged
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_delete() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_cursor_end();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return EventResult::Quit;
    }
    // Any other key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch one terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match state.mode {
            Mode::Normal => handle_normal_mode(state, key),
            Mode::Help => handle_help_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riders::{DirectorySource, Rider, RiderDirectory};

    fn make_state() -> AppState {
        let riders = vec![
            Rider::new("john smith", "Aries"),
            Rider::new("anna lee", "LeoSign"),
            Rider::new("hannah brown", "Libra"),
        ];
        AppState::new(RiderDirectory::new(riders, DirectorySource::Bundled), Vec::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state();

        assert_eq!(handle_normal_mode(&mut state, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_normal_mode(&mut state, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_shift_arrows_scroll_panel_not_list() {
        let mut state = make_state();
        let shift = |code| KeyEvent::new(code, KeyModifiers::SHIFT);

        handle_normal_mode(&mut state, shift(KeyCode::Down));
        handle_normal_mode(&mut state, shift(KeyCode::Down));
        assert_eq!(state.panel_scroll, 2);
        assert_eq!(state.cursor, 0);

        handle_normal_mode(&mut state, shift(KeyCode::Up));
        assert_eq!(state.panel_scroll, 1);
    }

    #[test]
    fn test_query_input() {
        let mut state = make_state();

        assert_eq!(
            handle_normal_mode(&mut state, key(KeyCode::Char('a'))),
            EventResult::QueryChanged
        );
        assert_eq!(
            handle_normal_mode(&mut state, key(KeyCode::Char('N'))),
            EventResult::QueryChanged
        );
        assert_eq!(state.query(), "aN");
        assert_eq!(state.selection.candidate_count(), 2);

        assert_eq!(handle_normal_mode(&mut state, ctrl('u')), EventResult::QueryChanged);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_backspace_on_empty_query_is_ignored() {
        let mut state = make_state();
        assert_eq!(
            handle_normal_mode(&mut state, key(KeyCode::Backspace)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_enter_selects() {
        let mut state = make_state();
        assert_eq!(handle_normal_mode(&mut state, key(KeyCode::Enter)), EventResult::Select);
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut state = make_state();
        handle_normal_mode(&mut state, key(KeyCode::Char('x')));

        assert_eq!(
            handle_normal_mode(&mut state, key(KeyCode::Esc)),
            EventResult::QueryChanged
        );
        assert_eq!(handle_normal_mode(&mut state, key(KeyCode::Esc)), EventResult::Quit);
        assert_eq!(handle_normal_mode(&mut state, ctrl('c')), EventResult::Quit);
    }

    #[test]
    fn test_question_mark_opens_help_only_on_empty_query() {
        let mut state = make_state();
        handle_normal_mode(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Help);

        assert_eq!(handle_help_mode(&mut state, key(KeyCode::Char('q'))), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);

        handle_normal_mode(&mut state, key(KeyCode::Char('a')));
        handle_normal_mode(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.query(), "a?");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = make_state();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&mut state, Event::Key(release)), EventResult::Ignored);
        assert_eq!(state.query(), "");
    }
}
