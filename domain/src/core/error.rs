//! Domain error types

use thiserror::Error;

/// Input rejected client-side, before any request is issued.
///
/// The message is the panel's fixed validation copy and is surfaced to the
/// user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    EmptyInput { message: &'static str },
}

impl ValidationError {
    pub fn empty(message: &'static str) -> Self {
        Self::EmptyInput { message }
    }

    /// The user-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyInput { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let error = ValidationError::empty("URL을 입력해 주세요.");
        assert_eq!(error.to_string(), "URL을 입력해 주세요.");
        assert_eq!(error.message(), "URL을 입력해 주세요.");
    }
}
