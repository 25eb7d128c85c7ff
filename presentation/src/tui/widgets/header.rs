//! Header widget: service address and health

use crate::tui::state::{HealthStatus, TuiState};
use hub_domain::util::truncate_str;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (dot_color, health_text) = match &self.state.health {
            HealthStatus::Checking => (Color::DarkGray, "checking...".to_string()),
            HealthStatus::Online(health) if health.is_ok() => {
                let ai = if health.ai_ready { "AI ready" } else { "AI off" };
                (Color::Green, format!("{} · {}", health.status, ai))
            }
            HealthStatus::Online(health) => (Color::Yellow, health.status.clone()),
            HealthStatus::Offline(reason) => {
                (Color::Red, format!("offline: {}", truncate_str(reason, 60)))
            }
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(dot_color)),
            Span::styled(
                self.state.api_base.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(health_text, Style::default().fg(dot_color)),
            Span::raw(" | "),
            Span::styled(
                format!("Wikipedia: {}", self.state.wiki.language().display_name()),
                Style::default().fg(Color::Cyan),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Research Hub ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
