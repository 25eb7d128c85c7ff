//! Encyclopedia language selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language edition of the encyclopedia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
    Ja,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ko, Language::En, Language::Ja];

    /// Code sent as the `lang` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Name shown in the language selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
            Self::Ja => "日本語",
        }
    }

    /// Next language in selector order, wrapping around
    pub fn cycle(&self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ja,
            Self::Ja => Self::Ko,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(format!("unsupported language '{}' (expected ko, en or ja)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" ja ".parse::<Language>().unwrap(), Language::Ja);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Language::Ja.cycle(), Language::Ko);
        assert_eq!(Language::Ko.cycle().code(), "en");
    }
}
