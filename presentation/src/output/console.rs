//! Console output formatter for panel states

use colored::Colorize;
use hub_application::{EncyclopediaController, EncyclopediaPhase, ResourceView};
use hub_domain::panel::{CITATIONS_HEADING, FALLBACK_NOTE, NO_RESULTS, OPEN_ARTICLE};
use hub_domain::{
    Disambiguation, Panel, QueryPhase, QueryState, ResourceItem, ServiceHealth, SummaryResult,
    WikiArticle,
};
use serde::Serialize;

/// Formats panel states for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything this formatter emits
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format the summarize panel
    pub fn format_summary(state: &QueryState<String, SummaryResult>) -> String {
        let panel = Panel::Summarize;
        let mut output = Self::header(panel);

        match state.phase() {
            QueryPhase::Idle => output.push_str(&format!("{}\n", panel.description().dimmed())),
            QueryPhase::Loading => output.push_str(&format!("{}\n", panel.loading_label())),
            QueryPhase::Error(message) => output.push_str(&Self::error(message)),
            QueryPhase::Success(result) => {
                if !result.source_url.is_empty() {
                    output.push_str(&format!(
                        "{} {}\n",
                        result.display_title().bold(),
                        format!("<{}>", result.source_url).dimmed()
                    ));
                }
                if result.used_fallback {
                    output.push_str(&Self::fallback_note(result.fallback_reason.as_deref()));
                }
                output.push('\n');
                output.push_str(result.summary.trim_end());
                output.push('\n');

                if result.has_citations() {
                    output.push_str(&Self::section_header(CITATIONS_HEADING));
                    for (i, citation) in result.citations.iter().enumerate() {
                        let label = citation.label(i);
                        match citation.href() {
                            Some(href) if href != label => output.push_str(&format!(
                                "  {}. {} {}\n",
                                i + 1,
                                label,
                                href.blue().underline()
                            )),
                            Some(href) => {
                                output.push_str(&format!("  {}. {}\n", i + 1, href.blue().underline()))
                            }
                            None => output.push_str(&format!("  {}. {}\n", i + 1, label)),
                        }
                    }
                }
            }
        }

        output
    }

    /// Format the resources panel
    pub fn format_resources(view: ResourceView<'_>) -> String {
        let panel = Panel::Resources;
        let mut output = Self::header(panel);

        match view {
            ResourceView::Prompt => {
                output.push_str(&format!("{}\n", panel.description().dimmed()))
            }
            ResourceView::Loading => output.push_str(&format!("{}\n", panel.loading_label())),
            ResourceView::Failed(message) => output.push_str(&Self::error(message)),
            ResourceView::NoResults(result) | ResourceView::Results(result) => {
                if result.used_fallback {
                    output.push_str(&Self::fallback_note(result.fallback_reason.as_deref()));
                }
                if result.is_empty() {
                    output.push_str(&format!("{}\n", NO_RESULTS.dimmed()));
                }
                for (i, item) in result.results.iter().enumerate() {
                    output.push_str(&Self::resource_item(i, item));
                }
            }
        }

        output
    }

    /// Format the encyclopedia panel
    pub fn format_encyclopedia(controller: &EncyclopediaController) -> String {
        let panel = Panel::Encyclopedia;
        let mut output = Self::header(panel);
        output.push_str(&format!(
            "{} {}\n",
            "Language:".cyan().bold(),
            controller.language().display_name()
        ));

        match controller.phase() {
            EncyclopediaPhase::Idle => {
                output.push_str(&format!("{}\n", panel.description().dimmed()))
            }
            EncyclopediaPhase::Searching { .. } => {
                output.push_str(&format!("{}\n", panel.loading_label()))
            }
            EncyclopediaPhase::Forcing {
                candidate,
                disambiguation,
            } => {
                output.push_str(&Self::candidates(disambiguation));
                output.push_str(&format!("{} ({})\n", panel.loading_label(), candidate));
            }
            EncyclopediaPhase::Ambiguous { disambiguation, .. } => {
                output.push_str(&Self::candidates(disambiguation));
                output.push_str(&format!(
                    "\n{}\n",
                    "Re-run with --pick N to open a candidate.".dimmed()
                ));
            }
            EncyclopediaPhase::Resolved(article) => output.push_str(&Self::article(article)),
            EncyclopediaPhase::Error(message) => output.push_str(&Self::error(message)),
        }

        output
    }

    /// Format a health report
    pub fn format_health(base_url: &str, health: &ServiceHealth) -> String {
        let status = if health.is_ok() {
            health.status.green().bold()
        } else {
            health.status.red().bold()
        };
        let ai = if health.ai_ready {
            "configured".green()
        } else {
            "not configured".yellow()
        };
        format!(
            "{} {}\n{} {}\n{} {}\n",
            "Service:".cyan().bold(),
            base_url,
            "Status:".cyan().bold(),
            status,
            "AI client:".cyan().bold(),
            ai
        )
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(panel: Panel) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}\n", line.cyan(), panel.title().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message.red())
    }

    fn fallback_note(reason: Option<&str>) -> String {
        match reason {
            Some(reason) if !reason.is_empty() => {
                format!("{}\n", format!("{} ({})", FALLBACK_NOTE, reason).yellow())
            }
            _ => format!("{}\n", FALLBACK_NOTE.yellow()),
        }
    }

    fn resource_item(index: usize, item: &ResourceItem) -> String {
        let mut output = format!("\n{}. {}", index + 1, item.title.bold());
        if let Some(via) = item.via.as_deref().filter(|v| !v.is_empty()) {
            output.push_str(&format!(" {}", format!("[{}]", via).magenta()));
        }
        output.push('\n');
        if !item.summary.is_empty() {
            output.push_str(&Self::indent(item.summary.trim_end(), "   "));
            output.push('\n');
        }
        if let Some(url) = item.url.as_deref().filter(|u| !u.is_empty()) {
            output.push_str(&format!("   {}\n", url.blue().underline()));
        }
        output
    }

    fn candidates(disambiguation: &Disambiguation) -> String {
        let mut output = String::new();
        if !disambiguation.message.is_empty() {
            output.push_str(&format!("{}\n", disambiguation.message.yellow()));
        }
        for (i, option) in disambiguation.options.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", format!("{:>2}", i + 1).cyan(), option));
        }
        output
    }

    fn article(article: &WikiArticle) -> String {
        let mut output = String::new();
        if let Some(title) = article.title.as_deref().filter(|t| !t.is_empty()) {
            output.push_str(&format!("{}\n", title.bold()));
        }
        output.push('\n');
        output.push_str(article.summary.trim_end());
        output.push('\n');
        if let Some(url) = article.url.as_deref().filter(|u| !u.is_empty()) {
            output.push_str(&format!("\n{} {}\n", OPEN_ARTICLE.cyan(), url.blue().underline()));
        }
        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_domain::{Citation, CitationMetadata, ResourceSearchResult};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_summary_lists_citation_labels() {
        plain();
        let mut state = QueryState::new();
        state.start("https://example.com".to_string());
        state.succeed(SummaryResult {
            source_url: "https://example.com".into(),
            summary: "- point".into(),
            citations: vec![
                Citation::link("https://a.example"),
                Citation {
                    url: None,
                    metadata: Some(CitationMetadata {
                        url: None,
                        title: None,
                    }),
                },
            ],
            used_fallback: true,
            fallback_reason: Some("quota".into()),
            ..SummaryResult::default()
        });

        let output = ConsoleFormatter::format_summary(&state);
        assert!(output.contains("- point"));
        assert!(output.contains("https://a.example"));
        assert!(output.contains("출처 2"));
        assert!(output.contains("quota"));
    }

    #[test]
    fn test_summary_error_shows_message() {
        plain();
        let mut state: QueryState<String, SummaryResult> = QueryState::new();
        state.start("x".into());
        state.fail("유효하지 않은 URL");
        assert!(ConsoleFormatter::format_summary(&state).contains("유효하지 않은 URL"));
    }

    #[test]
    fn test_empty_resources_show_no_results() {
        plain();
        let result = ResourceSearchResult::default();
        let output = ConsoleFormatter::format_resources(ResourceView::NoResults(&result));
        assert!(output.contains(NO_RESULTS));
    }

    #[test]
    fn test_resource_item_shows_via_tag() {
        plain();
        let result = ResourceSearchResult {
            results: vec![ResourceItem {
                title: "OWASP".into(),
                summary: "XSS cheat sheet".into(),
                url: Some("https://owasp.org".into()),
                via: Some("curated".into()),
            }],
            ..ResourceSearchResult::default()
        };
        let output = ConsoleFormatter::format_resources(ResourceView::Results(&result));
        assert!(output.contains("1. OWASP [curated]"));
        assert!(output.contains("https://owasp.org"));
    }

    #[test]
    fn test_encyclopedia_idle_shows_language() {
        plain();
        let controller = EncyclopediaController::default();
        let output = ConsoleFormatter::format_encyclopedia(&controller);
        assert!(output.contains(Panel::Encyclopedia.title()));
        assert!(output.contains(hub_domain::Language::Ko.display_name()));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
