//! Progress reporting for one-shot commands

pub mod reporter;
