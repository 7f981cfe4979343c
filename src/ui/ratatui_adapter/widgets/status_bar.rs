//! Status bar widget for messages and directory info

use crate::riders::DirectorySource;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and directory info
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
    source: DirectorySource,
    rider_count: usize,
    /// Whether the remote list is still on its way
    loading_directory: bool,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        theme: &'a Theme,
        source: DirectorySource,
        rider_count: usize,
    ) -> Self {
        Self {
            messages,
            theme,
            source,
            rider_count,
            loading_directory: false,
        }
    }

    /// Mark the remote directory as still loading
    #[must_use]
    pub const fn loading_directory(mut self, loading: bool) -> Self {
        self.loading_directory = loading;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    /// Right-hand summary, e.g. `[remote · 42 riders]`
    fn summary(&self) -> String {
        let noun = if self.rider_count == 1 { "rider" } else { "riders" };
        let pending = if self.loading_directory { ", updating" } else { "" };
        format!("[{} · {} {noun}{pending}]", self.source, self.rider_count)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(32)]).areas(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.summary(), self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
