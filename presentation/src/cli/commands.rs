//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use hub_domain::{Language, OutputFormat as DomainOutputFormat};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable panel rendering
    Text,
    /// The final panel state as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for research-hub
#[derive(Parser, Debug)]
#[command(name = "research-hub")]
#[command(author, version, about = "Research hub - URL summaries, keyword research and Wikipedia lookup")]
#[command(long_about = r#"
Research hub is a terminal client for a research lookup service.

It offers three independent panels:
1. Summarize: summarize a web page, with citations
2. Wikipedia: look up a term; ambiguous terms list candidates to pick from
3. Research: find and summarize resources for a set of keywords

Run without a subcommand to open the interactive screen.

Configuration files are loaded from (in priority order):
1. RESEARCH_HUB_* environment variables
2. --config <path>          Explicit config file
3. ./research-hub.toml      Project-level config
4. ~/.config/research-hub/config.toml   Global config

Example:
  research-hub summarize https://example.com/article
  research-hub wiki 파이썬 --pick 2
  research-hub research "secure AI, XSS 대응" --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base URL of the lookup service (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize a web page
    Summarize {
        /// Page URL (forwarded as-is; the service validates it)
        url: String,
    },

    /// Find resources for keywords
    Research {
        /// Free-form keywords
        keywords: String,
    },

    /// Look up a term on Wikipedia
    Wiki {
        /// Term to look up
        term: String,

        /// Wikipedia language edition (ko, en, ja)
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,

        /// When the term is ambiguous, resolve the N-th candidate (1-based)
        #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        pick: Option<u16>,
    },

    /// Check that the lookup service is reachable
    Health,

    /// Open the interactive screen (default)
    Tui {
        /// Initial Wikipedia language (ko, en, ja)
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,
    },
}

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse()
}
