//! Resources panel widget

use super::{dim_line, error_line, fallback_line, link_span, loading_line, render_panel};
use crate::tui::state::TuiState;
use hub_application::ResourceView;
use hub_domain::panel::{NO_RESULTS, OPEN_LINK};
use hub_domain::{Panel, ResourceSearchResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct ResourcesWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResourcesWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn result_lines(result: &ResourceSearchResult) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if result.used_fallback {
            lines.push(fallback_line(result.fallback_reason.as_deref()));
        }
        if result.is_empty() {
            lines.push(dim_line(NO_RESULTS));
            return lines;
        }

        for item in &result.results {
            let mut heading = vec![Span::styled(
                item.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(via) = item.via.as_deref().filter(|v| !v.is_empty()) {
                heading.push(Span::styled(
                    format!(" [{}]", via),
                    Style::default().fg(Color::Magenta),
                ));
            }
            lines.push(Line::from(heading));
            if !item.summary.is_empty() {
                lines.extend(item.summary.lines().map(Line::from));
            }
            if let Some(url) = item.url.as_deref().filter(|u| !u.is_empty()) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", OPEN_LINK), Style::default().fg(Color::Cyan)),
                    link_span(url),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl<'a> Widget for ResourcesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Panel::Resources;
        let body = match self.state.resources.view() {
            ResourceView::Prompt => vec![dim_line(panel.description())],
            ResourceView::Loading => vec![loading_line(self.state, panel)],
            ResourceView::Failed(message) => vec![error_line(message)],
            ResourceView::NoResults(result) | ResourceView::Results(result) => {
                Self::result_lines(result)
            }
        };
        render_panel(self.state, panel, body, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use hub_domain::{Language, ResourceItem};

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        ResourcesWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_empty_result_differs_from_prompt() {
        let mut state = TuiState::new("http://localhost:8000", Language::Ko);
        assert!(render(&state).contains(Panel::Resources.description()));

        let pending = state.resources.begin("xss".into()).unwrap();
        state
            .resources
            .complete(pending.generation(), Ok(ResourceSearchResult::default()));

        let text = render(&state);
        assert!(text.contains(NO_RESULTS));
        assert!(!text.contains(Panel::Resources.description()));
    }

    #[test]
    fn test_items_show_via_and_link() {
        let mut state = TuiState::new("http://localhost:8000", Language::Ko);
        let pending = state.resources.begin("xss".into()).unwrap();
        state.resources.complete(
            pending.generation(),
            Ok(ResourceSearchResult {
                results: vec![ResourceItem {
                    title: "OWASP".into(),
                    summary: "Cheat sheet".into(),
                    url: Some("https://owasp.org".into()),
                    via: Some("curated".into()),
                }],
                ..ResourceSearchResult::default()
            }),
        );

        let text = render(&state);
        assert!(text.contains("OWASP [curated]"));
        assert!(text.contains("https://owasp.org"));
    }
}
