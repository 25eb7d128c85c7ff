//! CLI entrypoint for research-hub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hub_application::{
    EncyclopediaController, LookupGateway, NoProgress, ProgressNotifier, ResourceController,
    SummarizeController,
};
use hub_domain::{OutputFormat, PhaseKind};
use hub_infrastructure::{ConfigLoader, FileConfig, HttpLookupGateway};
use hub_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, TuiApp};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let command = cli.command.clone().unwrap_or(Command::Tui { lang: None });
    let _log_guard = init_logging(cli.verbose, matches!(command, Command::Tui { .. }));

    info!("Starting research-hub");

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpLookupGateway::new(&config.api).context("Failed to set up the HTTP client")?,
    );

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };
    let format = config.output.format;

    let outcome = match command {
        Command::Summarize { url } => {
            let mut controller = SummarizeController::default();
            let kind = controller
                .run(gateway.as_ref(), url, progress.as_ref())
                .await;
            print(format, controller.state(), || {
                ConsoleFormatter::format_summary(controller.state())
            });
            kind
        }

        Command::Research { keywords } => {
            let mut controller = ResourceController::default();
            let kind = controller
                .run(gateway.as_ref(), keywords, progress.as_ref())
                .await;
            print(format, controller.state(), || {
                ConsoleFormatter::format_resources(controller.view())
            });
            kind
        }

        Command::Wiki { term, lang, pick } => {
            let language = lang.unwrap_or(config.wiki.default_language);
            let mut controller = EncyclopediaController::new(language);
            let mut kind = controller
                .search(gateway.as_ref(), &term, language, progress.as_ref())
                .await;

            if let Some(pick) = pick {
                if let Some(offered) = controller.disambiguation().map(|d| d.options.len()) {
                    match pick_index(pick, offered) {
                        Ok(index) => {
                            kind = controller
                                .force_option(gateway.as_ref(), index, progress.as_ref())
                                .await?;
                        }
                        Err(e) => {
                            eprintln!("error: {}", e);
                            kind = PhaseKind::Error;
                        }
                    }
                } else if kind == PhaseKind::Success {
                    warn!("'{}' resolved directly; ignoring --pick {}", term, pick);
                }
            }

            print(format, controller.phase(), || {
                ConsoleFormatter::format_encyclopedia(&controller)
            });
            kind
        }

        Command::Health => {
            let health = gateway
                .health()
                .await
                .with_context(|| format!("{} is unreachable", gateway.base_url()))?;
            print(format, &health, || {
                ConsoleFormatter::format_health(gateway.base_url().as_str(), &health)
            });
            if health.is_ok() {
                PhaseKind::Success
            } else {
                PhaseKind::Error
            }
        }

        Command::Tui { lang } => {
            let language = lang.unwrap_or(config.wiki.default_language);
            let gateway: Arc<dyn LookupGateway> = gateway;
            TuiApp::new(gateway, config.api.base_url.clone(), language)
                .with_tick_rate(config.tui.tick_rate())
                .run()
                .await
                .context("Terminal screen failed")?;
            PhaseKind::Success
        }
    };

    Ok(if outcome == PhaseKind::Error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Initialize logging based on verbosity level.
///
/// The terminal screen owns stdout/stderr, so it logs to a file instead.
fn init_logging(verbose: u8, to_file: bool) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if to_file {
        let dir = ConfigLoader::log_dir()?;
        std::fs::create_dir_all(&dir).ok()?;
        let appender = tracing_appender::rolling::never(dir, "research-hub.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

/// Merge config sources, then apply CLI flags on top
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(cli, config)
}

/// CLI flags win over every config source; validation runs on the result.
fn apply_overrides(cli: &Cli, mut config: FileConfig) -> Result<FileConfig> {
    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }
    if let Some(Command::Wiki { lang: Some(lang), .. } | Command::Tui { lang: Some(lang) }) =
        &cli.command
    {
        config.wiki.default_language = *lang;
    }

    if let Err(e) = config.validate() {
        bail!("Invalid configuration: {}", e);
    }
    Ok(config)
}

/// Convert a 1-based `--pick` into a candidate index.
fn pick_index(pick: u16, offered: usize) -> Result<usize> {
    let pick = usize::from(pick);
    if pick == 0 || pick > offered {
        bail!("--pick {} is out of range ({} candidates offered)", pick, offered);
    }
    Ok(pick - 1)
}

fn print<T, F>(format: OutputFormat, value: &T, text: F)
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
        OutputFormat::Text => print!("{}", text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_index_is_one_based() {
        assert_eq!(pick_index(1, 2).unwrap(), 0);
        assert_eq!(pick_index(2, 2).unwrap(), 1);
    }

    #[test]
    fn test_pick_past_end_reports_one_based_index() {
        let err = pick_index(3, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--pick 3 is out of range (2 candidates offered)"
        );
    }

    #[test]
    fn test_api_base_flag_replaces_invalid_file_value() {
        let cli = Cli::parse_from(["research-hub", "--api-base", "http://localhost:9000", "health"]);
        let mut config = FileConfig::default();
        config.api.base_url = "not a url".into();

        let config = apply_overrides(&cli, config).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_value_rejected_after_overrides() {
        let cli = Cli::parse_from(["research-hub", "health"]);
        let mut config = FileConfig::default();
        config.api.base_url = "not a url".into();

        let err = apply_overrides(&cli, config).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
