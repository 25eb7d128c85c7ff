//! Encyclopedia panel widget: article, or candidates to choose from

use super::{dim_line, error_line, link_span, loading_line, render_panel};
use crate::tui::state::TuiState;
use hub_application::EncyclopediaPhase;
use hub_domain::panel::OPEN_ARTICLE;
use hub_domain::{Disambiguation, Panel, WikiArticle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct EncyclopediaWidget<'a> {
    state: &'a TuiState,
}

impl<'a> EncyclopediaWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// `cursor` is `None` while the candidates are inert (forcing)
    fn candidate_lines(disambiguation: &Disambiguation, cursor: Option<usize>) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if !disambiguation.message.is_empty() {
            lines.push(Line::from(Span::styled(
                disambiguation.message.as_str(),
                Style::default().fg(Color::Yellow),
            )));
        }
        for (i, option) in disambiguation.options.iter().enumerate() {
            let line = if cursor == Some(i) {
                Line::from(Span::styled(
                    format!("▸ {}", option),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                let style = if cursor.is_some() {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(format!("  {}", option), style))
            };
            lines.push(line);
        }
        lines
    }

    fn article_lines(article: &WikiArticle) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if let Some(title) = article.title.as_deref().filter(|t| !t.is_empty()) {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.extend(article.summary.lines().map(Line::from));
        if let Some(url) = article.url.as_deref().filter(|u| !u.is_empty()) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", OPEN_ARTICLE), Style::default().fg(Color::Cyan)),
                link_span(url),
            ]));
        }
        lines
    }
}

impl<'a> Widget for EncyclopediaWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Panel::Encyclopedia;
        let body = match self.state.wiki.phase() {
            EncyclopediaPhase::Idle => vec![dim_line(panel.description())],
            EncyclopediaPhase::Searching { .. } => vec![loading_line(self.state, panel)],
            EncyclopediaPhase::Ambiguous { disambiguation, .. } => {
                let mut lines =
                    Self::candidate_lines(disambiguation, Some(self.state.candidate_cursor));
                lines.push(Line::from(""));
                lines.push(dim_line("↑/↓ 후보 선택, Enter(빈 입력) 열기"));
                lines
            }
            EncyclopediaPhase::Forcing { disambiguation, .. } => {
                let mut lines = vec![loading_line(self.state, panel)];
                lines.extend(Self::candidate_lines(disambiguation, None));
                lines
            }
            EncyclopediaPhase::Resolved(article) => Self::article_lines(article),
            EncyclopediaPhase::Error(message) => vec![error_line(message)],
        };
        render_panel(self.state, panel, body, area, buf);
    }
}
