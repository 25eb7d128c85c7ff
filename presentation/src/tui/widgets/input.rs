//! Input widget: one panel's text field with placeholder and trigger label

use crate::tui::state::TuiState;
use hub_domain::Panel;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
    panel: Panel,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, panel: Panel) -> Self {
        Self { state, panel }
    }

    /// Terminal position of the text cursor inside `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let input = self.state.input(self.panel);
        let before = Line::from(&input.as_str()[..input.cursor()]).width() as u16;
        let max_x = area.right().saturating_sub(2);
        Position::new((area.x + 1 + before).min(max_x), area.y + 1)
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == self.panel;
        let loading = self.state.is_loading(self.panel);
        let input = self.state.input(self.panel);

        let text = if input.as_str().is_empty() {
            Span::styled(self.panel.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(input.as_str())
        };

        // The trigger label doubles as the loading indicator
        let trigger = if loading {
            Span::styled(
                format!(" {} ", self.state.loading_label(self.panel)),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(
                format!(" Enter: {} ", self.panel.submit_label()),
                Style::default().fg(Color::DarkGray),
            )
        };

        let border = if focused && !loading {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title_bottom(Line::from(trigger).right_aligned());

        Paragraph::new(Line::from(text))
            .style(Style::default().add_modifier(if focused {
                Modifier::empty()
            } else {
                Modifier::DIM
            }))
            .block(block)
            .render(area, buf);
    }
}
