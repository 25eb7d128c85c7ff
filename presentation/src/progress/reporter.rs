//! Spinner shown while a panel is waiting on the service

use colored::Colorize;
use hub_application::ProgressNotifier;
use hub_domain::{Panel, PhaseKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports request progress with an indicatif spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, panel: Panel, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(panel.title());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_end(&self, _panel: Panel, outcome: PhaseKind) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        match outcome {
            PhaseKind::Error => pb.abandon_with_message(format!("{}", "failed".red())),
            _ => pb.finish_and_clear(),
        }
    }
}

/// Simple text-based progress (no spinner), for non-interactive output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, panel: Panel, label: &str) {
        eprintln!("{} {} {}", "->".cyan(), panel.title().bold(), label);
    }

    fn on_request_end(&self, _panel: Panel, outcome: PhaseKind) {
        if outcome == PhaseKind::Error {
            eprintln!("  {} failed", "x".red());
        }
    }
}
