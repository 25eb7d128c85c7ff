//! Output formatting for one-shot commands

pub mod console;
