//! Search bar widget for the rider query

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the query is empty
pub const EMPTY_QUERY_PLACEHOLDER: &str = "-- Choose a rider --";

/// Search bar widget that displays the query with a caret
pub struct SearchBar<'a> {
    query: &'a str,
    /// Caret position in the query (byte offset)
    caret: usize,
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, caret: usize, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            caret,
            title,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("> ", self.theme.cursor_style())];

        if self.query.is_empty() {
            spans.push(caret);
            spans.push(Span::styled(EMPTY_QUERY_PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            let split = self.caret.min(self.query.len());
            let (before, after) = self.query.split_at(split);
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_shows_placeholder() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("", 0, "Select a Rider", &theme).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Select a Rider"));
        assert!(row_text(&buf, 1).contains("Choose a rider"));
    }

    #[test]
    fn test_query_is_split_at_caret() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("anna", 2, "Select a Rider", &theme).render(area, &mut buf);

        let line = row_text(&buf, 1);
        assert!(line.contains("an│na"));
        assert!(!line.contains("Choose a rider"));
    }
}
