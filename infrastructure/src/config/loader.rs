//! Configuration file loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "research-hub";
const PROJECT_FILES: [&str; 2] = ["research-hub.toml", ".research-hub.toml"];
const ENV_PREFIX: &str = "RESEARCH_HUB_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `RESEARCH_HUB_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./research-hub.toml` or `./.research-hub.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/research-hub/config.toml`
    /// 5. Default values
    ///
    /// The merged result is not validated: CLI flags may still override it.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let figment = Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )?
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File layers only, lowest priority first. Missing optional files are
    /// skipped; a missing explicit file is an error.
    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/research-hub/config.toml if set,
    /// otherwise falls back to ~/.config/research-hub/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Directory for the TUI log file
    pub fn log_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|d| d.join(APP_DIR))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_domain::{Language, OutputFormat};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("research-hub"));
    }

    #[test]
    fn test_project_overrides_global() {
        let global = toml_file(
            r#"
[api]
base_url = "http://global.example"
timeout_seconds = 5

[wiki]
default_language = "en"
"#,
        );
        let project = toml_file(
            r#"
[api]
base_url = "http://project.example"
"#,
        );

        let figment =
            ConfigLoader::figment(Some(global.path()), Some(project.path()), None).unwrap();
        let config = ConfigLoader::extract(figment).unwrap();

        assert_eq!(config.api.base_url, "http://project.example");
        assert_eq!(config.api.timeout_seconds, Some(5));
        assert_eq!(config.wiki.default_language, Language::En);
    }

    #[test]
    fn test_explicit_overrides_project() {
        let project = toml_file("[output]\nformat = \"json\"\ncolor = false\n");
        let explicit = toml_file("[output]\nformat = \"text\"\n");

        let figment =
            ConfigLoader::figment(None, Some(project.path()), Some(explicit.path())).unwrap();
        let config = ConfigLoader::extract(figment).unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.color);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(
            ConfigLoader::figment(None, None, Some(&missing)),
            Err(ConfigError::MissingFile(path)) if path == missing
        ));
    }

    #[test]
    fn test_invalid_values_left_for_caller_to_validate() {
        let file = toml_file("[api]\nbase_url = \"not a url\"\ntimeout_seconds = 0\n");
        let figment = ConfigLoader::figment(None, None, Some(file.path())).unwrap();
        let config = ConfigLoader::extract(figment).unwrap();
        assert_eq!(config.api.base_url, "not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("config.toml");
        let figment = ConfigLoader::figment(Some(&absent), None, None).unwrap();
        assert_eq!(ConfigLoader::extract(figment).unwrap(), FileConfig::default());
    }
}
