//! Presentation layer for research-hub
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive terminal screen.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
