//! Help overlay listing every key of the selection view

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const NAVIGATION: &[(&str, &str)] = &[
    ("↑/↓", "Move through riders"),
    ("PgUp/PgDn", "Page up/down"),
    ("Shift+↑/↓", "Scroll the horoscope"),
    ("Enter", "Show the rider's horoscope"),
];

const QUERY: &[(&str, &str)] = &[
    ("Type", "Filter riders by name"),
    ("←/→ Home/End", "Move in the query"),
    ("Bksp/Del", "Delete a character"),
    ("Ctrl+W", "Delete word"),
    ("Ctrl+U", "Clear query"),
];

const SESSION: &[(&str, &str)] = &[
    ("Esc", "Clear query, or quit when empty"),
    ("Ctrl+C", "Quit"),
    ("F1 / ?", "Toggle this help"),
];

/// Centered help screen drawn over the main view
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        cell
    }

    fn section(&self, title: &'static str, binds: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            Line::styled(
                format!("  {title}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
        ];
        lines.extend(binds.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<14}"), self.theme.info_style()),
                Span::raw(*desc),
            ])
        }));
        lines
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = self.section("Navigation", NAVIGATION);
        lines.extend(self.section("Query", QUERY));
        lines.extend(self.section("Session", SESSION));
        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = self.build_content();
        #[allow(clippy::cast_possible_truncation)]
        let height = (content.len() as u16 + 2).min(area.height);
        let popup_area = Self::centered_rect(52.min(area.width), height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(content).block(block).render(popup_area, buf);
    }
}
