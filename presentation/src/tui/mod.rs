//! TUI (Text User Interface) module for research-hub
//!
//! All three panels on one screen, driven by the same controllers the
//! one-shot commands use.

mod app;
mod event;
mod keymap;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use keymap::{Action, KeyHandler};
pub use state::{HealthStatus, InputBuffer, TuiState};
