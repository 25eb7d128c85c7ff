//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const BINDINGS: [(&str, &str); 9] = [
    ("Tab / Shift+Tab", "Focus next / previous panel"),
    ("Enter", "Submit the focused panel"),
    ("Enter (empty)", "Open the highlighted Wikipedia candidate"),
    ("↑ / ↓", "Move the candidate cursor"),
    ("Ctrl+L", "Cycle Wikipedia language"),
    ("Ctrl+U", "Clear the input"),
    ("←/→ Home/End", "Move the text cursor"),
    ("F1", "Toggle this help"),
    ("Esc / Ctrl+C", "Quit"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(BINDINGS.iter().map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
