//! TUI widgets: ratatui components for the main layout
//!
//! Layout (wide terminals; narrow ones stack the panels vertically):
//! ┌── Header (3) ─────────────────────────────────────────┐
//! ├── Summarize ──────┬── Wikipedia ──────┬── Research ───┤
//! │ input (3)         │ input (3)         │ input (3)     │
//! │ body (flex)       │ body (flex)       │ body (flex)   │
//! └── StatusBar (1) ──┴───────────────────┴───────────────┘

pub mod encyclopedia;
pub mod header;
pub mod help;
pub mod input;
pub mod resources;
pub mod status_bar;
pub mod summarize;

use crate::tui::state::TuiState;
use hub_domain::Panel;
use hub_domain::panel::FALLBACK_NOTE;
use input::InputWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Below this width the panels are stacked instead of side by side
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 120;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    /// Panel areas in screen order (`Panel::ALL`)
    pub panels: [Rect; 3],
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let panels = Layout::default()
            .direction(direction)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            panels: [panels[0], panels[1], panels[2]],
            status_bar: vertical[2],
        }
    }

    /// Split a panel's inner area into its input line and body
    pub fn split_panel(inner: Rect) -> (Rect, Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Fill(1)])
            .split(inner);
        (parts[0], parts[1])
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Outer frame of a panel; the focused one is highlighted
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(style)
}

/// Render a panel: frame, input field, then `body` wrapped below it
pub fn render_panel(
    state: &TuiState,
    panel: Panel,
    body: Vec<Line<'_>>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = panel_block(panel.title(), state.focus == panel);
    let inner = block.inner(area);
    block.render(area, buf);

    let (input_area, body_area) = MainLayout::split_panel(inner);
    InputWidget::new(state, panel).render(input_area, buf);
    Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .render(body_area, buf);
}

pub(crate) fn dim_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

pub(crate) fn error_line(message: &str) -> Line<'_> {
    Line::from(Span::styled(message, Style::default().fg(Color::Red)))
}

pub(crate) fn loading_line(state: &TuiState, panel: Panel) -> Line<'static> {
    Line::from(Span::styled(
        state.loading_label(panel),
        Style::default().fg(Color::Yellow),
    ))
}

/// Provenance note for a degraded-but-successful result
pub(crate) fn fallback_line(reason: Option<&str>) -> Line<'static> {
    let text = match reason {
        Some(reason) if !reason.is_empty() => format!("{} ({})", FALLBACK_NOTE, reason),
        _ => FALLBACK_NOTE.to_string(),
    };
    Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
}

pub(crate) fn link_span(url: &str) -> Span<'_> {
    Span::styled(
        url,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    )
}

/// Flatten a buffer into text, one row per line. Cells hidden behind a
/// wide grapheme are skipped.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut rows = Vec::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        let mut x = area.left();
        while x < area.right() {
            let symbol = buf[(x, y)].symbol();
            row.push_str(symbol);
            x += Span::raw(symbol).width().max(1) as u16;
        }
        rows.push(row);
    }
    rows.join("\n")
}
