//! TUI state
//!
//! Owned and mutated only by the event loop. Each panel's controller holds
//! its query state; this struct adds what the screen itself needs (inputs,
//! focus, candidate cursor, flash messages).

use super::event::TuiEvent;
use hub_application::{
    EncyclopediaController, EncyclopediaPhase, GatewayError, ResourceController,
    SummarizeController,
};
use hub_domain::{Language, Panel, ServiceHealth};
use std::time::{Duration, Instant};
use tracing::debug;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Single-line text input with a byte-offset cursor on char boundaries
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Liveness of the lookup service, shown in the header
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Checking,
    Online(ServiceHealth),
    Offline(String),
}

pub struct TuiState {
    pub focus: Panel,
    pub summarize: SummarizeController,
    pub resources: ResourceController,
    pub wiki: EncyclopediaController,
    /// Highlighted encyclopedia candidate
    pub candidate_cursor: usize,
    pub health: HealthStatus,
    pub api_base: String,
    pub flash_message: Option<(String, Instant)>,
    pub show_help: bool,
    pub should_quit: bool,
    inputs: [InputBuffer; 3],
    tick_count: usize,
}

impl TuiState {
    pub fn new(api_base: impl Into<String>, language: Language) -> Self {
        Self {
            focus: Panel::Summarize,
            summarize: SummarizeController::default(),
            resources: ResourceController::default(),
            wiki: EncyclopediaController::new(language),
            candidate_cursor: 0,
            health: HealthStatus::Checking,
            api_base: api_base.into(),
            flash_message: None,
            show_help: false,
            should_quit: false,
            inputs: Default::default(),
            tick_count: 0,
        }
    }

    fn slot(panel: Panel) -> usize {
        match panel {
            Panel::Summarize => 0,
            Panel::Encyclopedia => 1,
            Panel::Resources => 2,
        }
    }

    pub fn input(&self, panel: Panel) -> &InputBuffer {
        &self.inputs[Self::slot(panel)]
    }

    pub fn input_mut(&mut self, panel: Panel) -> &mut InputBuffer {
        &mut self.inputs[Self::slot(panel)]
    }

    pub fn focused_input_mut(&mut self) -> &mut InputBuffer {
        self.input_mut(self.focus)
    }

    pub fn is_loading(&self, panel: Panel) -> bool {
        match panel {
            Panel::Summarize => self.summarize.is_loading(),
            Panel::Encyclopedia => self.wiki.is_loading(),
            Panel::Resources => self.resources.is_loading(),
        }
    }

    /// True while the encyclopedia shows selectable candidates
    pub fn candidates_selectable(&self) -> bool {
        matches!(self.wiki.phase(), EncyclopediaPhase::Ambiguous { .. })
    }

    pub fn candidate_up(&mut self) {
        self.candidate_cursor = self.candidate_cursor.saturating_sub(1);
    }

    pub fn candidate_down(&mut self) {
        let len = self
            .wiki
            .disambiguation()
            .map(|d| d.options.len())
            .unwrap_or(0);
        if self.candidate_cursor + 1 < len {
            self.candidate_cursor += 1;
        }
    }

    pub fn cycle_language(&mut self) {
        let next = self.wiki.language().cycle();
        self.wiki.set_language(next);
    }

    /// Apply a request task's answer. Stale answers are dropped by the
    /// controllers.
    pub fn apply(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Summarize {
                generation,
                outcome,
            } => {
                self.summarize.complete(generation, outcome);
            }
            TuiEvent::Resources {
                generation,
                outcome,
            } => {
                self.resources.complete(generation, outcome);
            }
            TuiEvent::Wiki {
                generation,
                outcome,
            } => {
                if self.wiki.complete(generation, outcome) && self.candidates_selectable() {
                    self.candidate_cursor = 0;
                }
            }
            TuiEvent::Health(result) => self.set_health(result),
        }
    }

    fn set_health(&mut self, result: Result<ServiceHealth, GatewayError>) {
        self.health = match result {
            Ok(health) => HealthStatus::Online(health),
            Err(error) => {
                debug!("Health check failed: {}", error);
                HealthStatus::Offline(error.to_string())
            }
        };
    }

    /// Loading label with an animated spinner prefix
    pub fn loading_label(&self, panel: Panel) -> String {
        format!(
            "{} {}",
            SPINNER_FRAMES[self.tick_count % SPINNER_FRAMES.len()],
            panel.loading_label()
        )
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.expire_flash(Duration::from_secs(4));
    }

    /// Set a transient message in the status bar
    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}
