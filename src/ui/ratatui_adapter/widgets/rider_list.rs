//! Dropdown list of candidate riders

use crate::riders::Rider;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Candidate list with cursor and chosen-rider markers
pub struct RiderList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    title: String,
}

impl<'a> RiderList<'a> {
    /// Create a new rider list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let shown = state.selection.candidate_count();
        let total = state.selection.directory().len();
        let title = format!(" Riders ({shown}/{total}) ");

        Self { state, theme, title }
    }

    fn render_rider(&self, rider: &'a Rider, is_cursor: bool) -> ListItem<'a> {
        let is_chosen = self
            .state
            .selection
            .selected()
            .is_some_and(|selected| selected.id == rider.id);

        let cursor_char = if is_cursor { ">" } else { " " };
        let chosen_char = if is_chosen { "✓" } else { " " };

        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(chosen_char, self.theme.chosen_style()),
            Span::raw(" "),
            Span::styled(rider.name.as_str(), name_style),
            Span::raw(" "),
            Span::styled(format!("({})", rider.zodiac_sign), self.theme.sign_style()),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for RiderList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.selection.candidate_count() == 0 {
            Paragraph::new(Line::styled("No matching riders", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;

        let items: Vec<ListItem> = self
            .state
            .selection
            .candidates()
            .enumerate()
            .skip(start)
            .take(visible_height)
            .map(|(pos, rider)| self.render_rider(rider, pos == self.state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
