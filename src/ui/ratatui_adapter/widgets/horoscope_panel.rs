//! Result panel showing the selected rider's horoscope

use crate::horoscope::NOT_FOUND_TEXT;
use crate::selection::PanelView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Text while a lookup is outstanding
pub const LOADING_TEXT: &str = "Loading horoscope...";

/// Renders exactly one [`PanelView`] state
pub struct HoroscopePanel<'a> {
    view: PanelView<'a>,
    theme: &'a Theme,
    scroll: u16,
}

impl<'a> HoroscopePanel<'a> {
    #[must_use]
    pub const fn new(view: PanelView<'a>, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            scroll: 0,
        }
    }

    /// Set scroll offset
    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for HoroscopePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match self.view {
            PanelView::Idle => (String::from(" Horoscope "), Vec::new()),
            PanelView::Loading => (
                String::from(" Horoscope "),
                vec![Line::styled(LOADING_TEXT, self.theme.dimmed_style())],
            ),
            PanelView::NotFound => (
                String::from(" Horoscope "),
                vec![Line::styled(NOT_FOUND_TEXT, self.theme.warning_style())],
            ),
            PanelView::Found(result) => {
                let mut lines = vec![
                    Line::styled(result.title(), self.theme.card_title_style()),
                    Line::styled(result.date.to_string(), self.theme.dimmed_style()),
                    Line::raw(""),
                ];
                if result.content.is_some() {
                    lines.extend(result.body().lines().map(Line::raw));
                } else {
                    lines.push(Line::styled(result.body(), self.theme.dimmed_style()));
                }
                (format!(" {} ", result.sign), lines)
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
