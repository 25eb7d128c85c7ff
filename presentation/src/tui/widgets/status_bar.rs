//! Status bar widget: focused panel + key hints + flash messages

use crate::tui::state::TuiState;
use hub_domain::Panel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Panel::Encyclopedia if self.state.candidates_selectable() => {
                "↑/↓:candidate  Enter:open  Ctrl+L:lang  Tab:next  F1:help  Esc:quit"
            }
            Panel::Encyclopedia => "Enter:search  Ctrl+L:lang  Tab:next  F1:help  Esc:quit",
            _ => "Enter:submit  Tab:next  F1:help  Esc:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: focused panel
        let focus_text = format!(" {} ", self.state.focus.title());
        let focus_line = Line::from(Span::styled(
            focus_text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let focus_width = focus_line.width() as u16;
        buf.set_line(area.x, area.y, &focus_line, focus_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => self.hints().to_string(),
        };
        let right_line = Line::from(Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
        let right_width = right_line.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + focus_width {
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
