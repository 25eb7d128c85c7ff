//! Summarize panel widget

use super::{dim_line, error_line, fallback_line, link_span, loading_line, render_panel};
use crate::tui::state::TuiState;
use hub_domain::panel::CITATIONS_HEADING;
use hub_domain::{Panel, QueryPhase, SummaryResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct SummarizeWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SummarizeWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn result_lines(result: &SummaryResult) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        if !result.source_url.is_empty() {
            lines.push(Line::from(Span::styled(
                result.display_title(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(link_span(&result.source_url)));
        }
        if result.used_fallback {
            lines.push(fallback_line(result.fallback_reason.as_deref()));
        }
        lines.push(Line::from(""));
        lines.extend(result.summary.lines().map(Line::from));

        if result.has_citations() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                CITATIONS_HEADING,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for (i, citation) in result.citations.iter().enumerate() {
                let mut spans = vec![Span::raw(format!("{}. ", i + 1))];
                match citation.href() {
                    Some(href) => {
                        let label = citation.label(i);
                        if label != href {
                            spans.push(Span::raw(format!("{} ", label)));
                        }
                        spans.push(link_span(href));
                    }
                    None => spans.push(Span::raw(citation.label(i))),
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}

impl<'a> Widget for SummarizeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Panel::Summarize;
        let body = match self.state.summarize.state().phase() {
            QueryPhase::Idle => vec![dim_line(panel.description())],
            QueryPhase::Loading => vec![loading_line(self.state, panel)],
            QueryPhase::Error(message) => vec![error_line(message)],
            QueryPhase::Success(result) => Self::result_lines(result),
        };
        render_panel(self.state, panel, body, area, buf);
    }
}
