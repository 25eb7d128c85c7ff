//! Key bindings
//!
//! The screen has a single input mode: printable keys always edit the
//! focused panel's input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Focus the next panel (Tab)
    FocusNext,
    /// Focus the previous panel (Shift+Tab)
    FocusPrevious,
    /// Submit the focused panel, or force the highlighted candidate
    Submit,
    /// Cycle the encyclopedia language
    CycleLanguage,
    /// Move the candidate cursor up
    CandidateUp,
    /// Move the candidate cursor down
    CandidateDown,
    InsertChar(char),
    DeleteChar,
    ClearInput,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    ToggleHelp,
    None,
}

/// Maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::CycleLanguage,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
            (KeyCode::Esc, _) => Action::Quit,
            (KeyCode::Tab, _) => Action::FocusNext,
            (KeyCode::BackTab, _) => Action::FocusPrevious,
            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Up, _) => Action::CandidateUp,
            (KeyCode::Down, _) => Action::CandidateDown,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            (KeyCode::F(1), _) => Action::ToggleHelp,
            _ => Action::None,
        }
    }
}
