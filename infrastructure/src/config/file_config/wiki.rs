//! Encyclopedia configuration from TOML (`[wiki]` section)

use hub_domain::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikiConfig {
    /// Language selected when the encyclopedia panel starts
    pub default_language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_deserialize() {
        let config: super::super::FileConfig = toml::from_str("[wiki]\ndefault_language = \"ja\"\n").unwrap();
        assert_eq!(config.wiki.default_language, Language::Ja);
    }
}
