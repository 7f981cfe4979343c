//! Rider selection application
//!
//! Owns the terminal and the event loop. The loop polls three inputs in
//! turn: the one-shot directory loader, the horoscope worker and crossterm
//! events. None of them blocks for longer than the event poll timeout.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{HelpBar, HelpOverlay, HoroscopePanel, RiderList, SearchBar, StatusBar};
use crate::horoscope::{HoroscopeDate, HoroscopeLookup, HoroscopeResponse, HoroscopeWorker};
use crate::riders::{DirectoryLoader, RiderDirectory};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::{Line, Span},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Application title shown in the header
pub const APP_TITLE: &str = "VeloScope";
/// Title of the query box
pub const QUERY_PROMPT: &str = "Select a Rider";

const TICK: Duration = Duration::from_millis(50);

/// Interactive rider selection view
pub struct SelectionApp {
    directory: RiderDirectory,
    lookup: HoroscopeLookup,
    loader: DirectoryLoader,
    date: Option<HoroscopeDate>,
    theme: Theme,
}

impl SelectionApp {
    /// Browse `directory`, fetching horoscopes through `lookup`
    #[must_use]
    pub fn new(directory: RiderDirectory, lookup: HoroscopeLookup) -> Self {
        Self {
            directory,
            lookup,
            loader: DirectoryLoader::disabled(),
            date: None,
            theme: Theme::default(),
        }
    }

    /// Replace the directory once `loader` delivers
    #[must_use]
    pub fn with_loader(mut self, loader: DirectoryLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Look up horoscopes for a fixed day instead of today
    #[must_use]
    pub const fn with_date(mut self, date: HoroscopeDate) -> Self {
        self.date = Some(date);
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot start or terminal I/O
    /// fails. The terminal is restored in either case.
    pub fn run(self) -> Result<()> {
        let worker = HoroscopeWorker::spawn(self.lookup).map_err(|e| {
            tracing::error!(error = %e, "failed to spawn horoscope worker");
            UiError::WorkerError("horoscope")
        })?;
        let mut session = Session::new(self.directory, worker, self.loader, self.date);

        let mut terminal = Self::setup_terminal()?;
        let result = run_loop(&mut terminal, &mut session, &self.theme);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::error!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
    theme: &Theme,
) -> Result<()> {
    loop {
        session.pump();

        let loading_directory = session.loader.is_pending();
        terminal.draw(|frame| render(frame, &mut session.state, theme, loading_directory))?;

        let result = poll_and_handle(&mut session.state, TICK)?;
        session.handle(result);

        if session.state.should_exit {
            return Ok(());
        }
        session.state.cleanup_messages();
    }
}

/// Everything the loop mutates, kept apart from the terminal
struct Session {
    state: AppState,
    worker: HoroscopeWorker,
    loader: DirectoryLoader,
    date: Option<HoroscopeDate>,
}

impl Session {
    fn new(
        directory: RiderDirectory,
        worker: HoroscopeWorker,
        loader: DirectoryLoader,
        date: Option<HoroscopeDate>,
    ) -> Self {
        Self {
            state: AppState::new(directory, HelpBar::default_hints()),
            worker,
            loader,
            date,
        }
    }

    /// Apply whatever the background threads produced since the last tick
    fn pump(&mut self) {
        if let Some(directory) = self.loader.poll() {
            self.state.replace_directory(directory);
        }

        while let Some(response) = self.worker.try_next() {
            let ticket = response.ticket;
            if !self.state.apply_response(response) {
                tracing::debug!(ticket, "discarded stale horoscope response");
            }
        }
    }

    fn handle(&mut self, result: EventResult) {
        match result {
            EventResult::Select => self.select(),
            EventResult::Quit => self.state.quit(),
            EventResult::QueryChanged | EventResult::Continue | EventResult::Ignored => {}
        }
    }

    fn select(&mut self) {
        let date = self.date.unwrap_or_else(HoroscopeDate::today);
        let Some(request) = self.state.select_current(date) else {
            return;
        };

        tracing::info!(rider = %request.rider.name, %date, ticket = request.ticket, "rider selected");

        let ticket = request.ticket;
        let rider_id = request.rider.id.clone();
        if !self.worker.submit(request) {
            // Settle the panel instead of leaving it loading forever
            tracing::error!("horoscope worker is gone");
            self.state.apply_response(HoroscopeResponse {
                ticket,
                rider_id,
                result: None,
            });
            self.state
                .add_message(MessageLevel::Error, "Horoscope lookups unavailable".to_string());
        }
    }
}

/// Draw the whole view into `frame`
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme, loading_directory: bool) {
    let [header, search, body, status, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [list_area, panel_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body);

    state.visible_height = list_area.height.saturating_sub(2).max(1) as usize;

    frame.render_widget(
        Line::from(vec![
            Span::styled(format!(" {APP_TITLE} "), theme.header_style()),
            Span::styled("daily horoscopes for pro cyclists", theme.dimmed_style()),
        ]),
        header,
    );

    frame.render_widget(
        SearchBar::new(state.query(), state.query_cursor, QUERY_PROMPT, theme)
            .focused(state.mode == Mode::Normal),
        search,
    );
    frame.render_widget(RiderList::new(state, theme), list_area);
    frame.render_widget(
        HoroscopePanel::new(state.selection.panel(), theme).scroll(state.panel_scroll),
        panel_area,
    );

    let messages = state.active_messages();
    let directory = state.selection.directory();
    frame.render_widget(
        StatusBar::new(&messages, theme, directory.source(), directory.len())
            .loading_directory(loading_directory),
        status,
    );
    frame.render_widget(HelpBar::new(&state.hints, theme), help);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), frame.area());
    }
}

/// Draw once on any backend; used for snapshot-style checks
///
/// # Errors
///
/// Returns the backend's error if drawing fails.
pub fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    theme: &Theme,
    loading_directory: bool,
) -> std::result::Result<(), B::Error> {
    terminal.draw(|frame| render(frame, state, theme, loading_directory))?;
    Ok(())
}
