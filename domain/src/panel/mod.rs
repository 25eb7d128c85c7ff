//! Lookup panels and their fixed copy.
//!
//! The product ships Korean copy only. Every user-facing string a panel
//! needs lives here so controllers and front ends never hard-code text.

use serde::{Deserialize, Serialize};

/// Heading of the citation list in a summary
pub const CITATIONS_HEADING: &str = "출처";

/// Shown when a resource search succeeded with zero items
pub const NO_RESULTS: &str = "검색 결과가 없습니다.";

/// Prefix of the provenance note for degraded-but-successful results
pub const FALLBACK_NOTE: &str = "AI 응답 대신 대체 결과를 표시합니다.";

/// Label of an outbound resource link
pub const OPEN_LINK: &str = "링크 열기";

/// Label of the outbound encyclopedia article link
pub const OPEN_ARTICLE: &str = "위키 문서 열기";

/// One independently operating lookup capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Summarize,
    Encyclopedia,
    Resources,
}

impl Panel {
    /// All panels in screen order
    pub const ALL: [Panel; 3] = [Panel::Summarize, Panel::Encyclopedia, Panel::Resources];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Summarize => "웹 페이지 요약",
            Self::Encyclopedia => "Wikipedia 검색",
            Self::Resources => "키워드 리서치",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Summarize => {
                "AI가 핵심 내용을 bullet 형식으로 요약하며, AI 응답이 없으면 로컬 요약으로 대체합니다."
            }
            Self::Encyclopedia => {
                "모호하면 제시된 후보를 골라 바로 탐색하고, 더 좁혀가며 원하는 문서를 찾으세요."
            }
            Self::Resources => "AI가 신뢰할 만한 자료를 찾아 요약과 링크를 제공합니다.",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Summarize => "https://example.com/article",
            Self::Encyclopedia => "예) 머신 러닝",
            Self::Resources => "예) secure AI, XSS 대응",
        }
    }

    /// Label of the trigger control when idle
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Summarize => "요약하기",
            Self::Encyclopedia => "검색",
            Self::Resources => "자료 찾기",
        }
    }

    /// Label of the trigger control while a request is in flight
    pub fn loading_label(&self) -> &'static str {
        match self {
            Self::Summarize => "요약 중...",
            Self::Encyclopedia => "검색 중...",
            Self::Resources => "탐색 중...",
        }
    }

    /// Message for empty input, raised before any network call
    pub fn validation_message(&self) -> &'static str {
        match self {
            Self::Summarize => "URL을 입력해 주세요.",
            Self::Encyclopedia => "검색어를 입력해 주세요.",
            Self::Resources => "키워드를 입력해 주세요.",
        }
    }

    /// Message for a failed request whose body carries no error field
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Summarize => "요약에 실패했습니다.",
            Self::Encyclopedia => "검색에 실패했습니다.",
            Self::Resources => "자료 검색에 실패했습니다.",
        }
    }

    /// Short ASCII name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Encyclopedia => "encyclopedia",
            Self::Resources => "resources",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Summarize => Self::Encyclopedia,
            Self::Encyclopedia => Self::Resources,
            Self::Resources => Self::Summarize,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Summarize => Self::Resources,
            Self::Encyclopedia => Self::Summarize,
            Self::Resources => Self::Encyclopedia,
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_panel() {
        let mut panel = Panel::Summarize;
        for expected in [Panel::Encyclopedia, Panel::Resources, Panel::Summarize] {
            panel = panel.next();
            assert_eq!(panel, expected);
        }
        assert_eq!(Panel::Summarize.previous(), Panel::Resources);
    }

    #[test]
    fn test_copy_is_distinct_per_panel() {
        assert_ne!(
            Panel::Summarize.validation_message(),
            Panel::Resources.validation_message()
        );
        assert_eq!(Panel::Encyclopedia.validation_message(), "검색어를 입력해 주세요.");
        assert_eq!(Panel::Resources.failure_message(), "자료 검색에 실패했습니다.");
    }
}
