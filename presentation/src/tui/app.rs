//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 request tasks (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ Lookup::fetch / WikiRequest::execute
//!   ├─ event_rx (TuiEvent) <──────────────┴─ event_tx.send(generation, outcome)
//!   └─ tick_interval
//! ```
//!
//! The loop is the only writer of [`TuiState`]. A task never touches state;
//! its answer is applied when it arrives, and discarded there if a newer
//! request was issued in the meantime.

use super::event::TuiEvent;
use super::keymap::{Action, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    MainLayout, encyclopedia::EncyclopediaWidget, header::HeaderWidget, help::HelpWidget,
    input::InputWidget, resources::ResourcesWidget, status_bar::StatusBarWidget,
    summarize::SummarizeWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use hub_application::{GatewayError, Lookup, LookupGateway, PendingRequest, WikiRequest};
use hub_domain::{Language, Panel};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp {
    gateway: Arc<dyn LookupGateway>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    tick_rate: Duration,
    state: TuiState,
}

impl TuiApp {
    pub fn new(
        gateway: Arc<dyn LookupGateway>,
        api_base: impl Into<String>,
        language: Language,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            event_tx,
            event_rx,
            tick_rate: Duration::from_millis(250),
            state: TuiState::new(api_base, language),
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!("TUI started");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);

        self.spawn_health_check();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(term_event) = event_stream.next() => {
                    self.handle_terminal_event(term_event?);
                }

                // Answers from request tasks
                Some(event) = self.event_rx.recv() => {
                    self.state.apply(event);
                }

                // Spinner animation, flash expiry
                _ = tick.tick() => {
                    self.state.tick();
                }
            }
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame) {
        let layout = MainLayout::compute(frame.area());
        let state = &self.state;

        frame.render_widget(HeaderWidget::new(state), layout.header);
        for (panel, area) in Panel::ALL.into_iter().zip(layout.panels) {
            match panel {
                Panel::Summarize => frame.render_widget(SummarizeWidget::new(state), area),
                Panel::Encyclopedia => frame.render_widget(EncyclopediaWidget::new(state), area),
                Panel::Resources => frame.render_widget(ResourcesWidget::new(state), area),
            }
            if panel == state.focus && !state.show_help {
                let inner = super::widgets::panel_block("", true).inner(area);
                let (input_area, _) = MainLayout::split_panel(inner);
                frame.set_cursor_position(InputWidget::new(state, panel).cursor_position(input_area));
            }
        }
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 60, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            frame.render_widget(HelpWidget, help_area);
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            // If help is showing, Esc or F1 closes it
            if self.state.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                    self.state.show_help = false;
                }
                return;
            }

            let action = KeyHandler::handle(key);
            self.handle_action(action);
        }
        // Resize: terminal auto-resizes on next draw
    }

    /// Handle a semantic key action
    fn handle_action(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::None => {}
            Action::Quit => state.should_quit = true,
            Action::ToggleHelp => state.show_help = !state.show_help,

            Action::FocusNext => state.focus = state.focus.next(),
            Action::FocusPrevious => state.focus = state.focus.previous(),

            Action::InsertChar(c) => state.focused_input_mut().insert_char(c),
            Action::DeleteChar => state.focused_input_mut().delete_char(),
            Action::ClearInput => state.focused_input_mut().clear(),
            Action::CursorLeft => state.focused_input_mut().cursor_left(),
            Action::CursorRight => state.focused_input_mut().cursor_right(),
            Action::CursorStart => state.focused_input_mut().cursor_start(),
            Action::CursorEnd => state.focused_input_mut().cursor_end(),

            Action::CycleLanguage => {
                if state.focus == Panel::Encyclopedia {
                    state.cycle_language();
                    let language = state.wiki.language();
                    state.set_flash(format!("Wikipedia: {}", language.display_name()));
                }
            }
            Action::CandidateUp => {
                if state.focus == Panel::Encyclopedia {
                    state.candidate_up();
                }
            }
            Action::CandidateDown => {
                if state.focus == Panel::Encyclopedia {
                    state.candidate_down();
                }
            }

            Action::Submit => self.submit(),
        }
    }

    /// Submit the focused panel. Ignored while that panel is loading.
    fn submit(&mut self) {
        let panel = self.state.focus;
        if self.state.is_loading(panel) {
            self.state.set_flash(panel.loading_label());
            return;
        }

        match panel {
            Panel::Summarize => {
                let input = self.state.input(panel).as_str().to_string();
                if let Ok(pending) = self.state.summarize.begin(input) {
                    let lookup = self.state.summarize.lookup().clone();
                    self.spawn_lookup(lookup, pending, |generation, outcome| {
                        TuiEvent::Summarize {
                            generation,
                            outcome,
                        }
                    });
                }
            }
            Panel::Resources => {
                let input = self.state.input(panel).as_str().to_string();
                if let Ok(pending) = self.state.resources.begin(input) {
                    let lookup = self.state.resources.lookup().clone();
                    self.spawn_lookup(lookup, pending, |generation, outcome| {
                        TuiEvent::Resources {
                            generation,
                            outcome,
                        }
                    });
                }
            }
            Panel::Encyclopedia => self.submit_wiki(),
        }
    }

    /// Enter with an empty input while candidates are shown opens the
    /// highlighted candidate; anything else starts a new search.
    fn submit_wiki(&mut self) {
        let state = &mut self.state;
        let input = state.input(Panel::Encyclopedia);

        let request = if input.is_blank() && state.candidates_selectable() {
            match state.wiki.begin_force_option(state.candidate_cursor) {
                Ok(request) => Some(request),
                Err(error) => {
                    state.set_flash(error.to_string());
                    None
                }
            }
        } else {
            let term = input.as_str().to_string();
            let language = state.wiki.language();
            state.wiki.begin_search(&term, language).ok()
        };

        if let Some(request) = request {
            self.spawn_wiki(request);
        }
    }

    fn spawn_lookup<L, F>(&self, lookup: L, pending: PendingRequest<L::Request>, wrap: F)
    where
        L: Lookup,
        F: FnOnce(u64, Result<L::Output, GatewayError>) -> TuiEvent
            + Send
            + 'static,
    {
        debug!(panel = %L::PANEL, generation = pending.generation(), "Spawning request");
        let gateway = Arc::clone(&self.gateway);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = lookup.fetch(gateway.as_ref(), pending.request()).await;
            let _ = tx.send(wrap(pending.generation(), outcome));
        });
    }

    fn spawn_wiki(&self, request: WikiRequest) {
        debug!(
            panel = %Panel::Encyclopedia,
            generation = request.generation,
            kind = ?request.kind,
            "Spawning request"
        );
        let gateway = Arc::clone(&self.gateway);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute(gateway.as_ref()).await;
            let _ = tx.send(TuiEvent::Wiki {
                generation: request.generation,
                outcome,
            });
        });
    }

    fn spawn_health_check(&self) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(TuiEvent::Health(gateway.health().await));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hub_application::EncyclopediaPhase;
    use hub_domain::{
        Disambiguation, EncyclopediaResult, PhaseKind, QueryText, ResourceSearchResult,
        ServiceHealth, SummaryResult, WikiArticle,
    };

    /// Answers every term as ambiguous; forced lookups echo the candidate
    struct StubGateway;

    #[async_trait]
    impl LookupGateway for StubGateway {
        async fn summarize_url(&self, url: &QueryText) -> Result<SummaryResult, GatewayError> {
            Ok(SummaryResult {
                source_url: url.to_string(),
                summary: "- summary".into(),
                ..SummaryResult::default()
            })
        }

        async fn search_resources(
            &self,
            _keywords: &QueryText,
        ) -> Result<ResourceSearchResult, GatewayError> {
            Err(GatewayError::Request {
                status: 500,
                message: None,
            })
        }

        async fn wiki_search(
            &self,
            term: &QueryText,
            _language: Language,
        ) -> Result<EncyclopediaResult, GatewayError> {
            Ok(EncyclopediaResult::Ambiguous(Disambiguation {
                message: "다의어".into(),
                options: vec![format!("{}(1)", term), format!("{}(2)", term)],
            }))
        }

        async fn wiki_force(
            &self,
            term: &QueryText,
            language: Language,
        ) -> Result<WikiArticle, GatewayError> {
            Ok(WikiArticle {
                summary: format!("{} in {}", term, language),
                url: None,
                title: None,
            })
        }

        async fn health(&self) -> Result<ServiceHealth, GatewayError> {
            Ok(ServiceHealth {
                status: "ok".into(),
                ai_ready: false,
            })
        }
    }

    fn app() -> TuiApp {
        TuiApp::new(Arc::new(StubGateway), "http://localhost:8000", Language::Ko)
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InsertChar(c));
        }
    }

    async fn pump(app: &mut TuiApp) {
        let event = app.event_rx.recv().await.unwrap();
        app.state.apply(event);
    }

    #[tokio::test]
    async fn test_summarize_round_trip() {
        let mut app = app();
        type_text(&mut app, "https://example.com");
        app.handle_action(Action::Submit);
        assert!(app.state.is_loading(Panel::Summarize));

        pump(&mut app).await;
        assert_eq!(app.state.summarize.state().kind(), PhaseKind::Success);
        // Input is kept after submission
        assert_eq!(
            app.state.input(Panel::Summarize).as_str(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_empty_submit_shows_validation_error() {
        let mut app = app();
        app.handle_action(Action::FocusPrevious);
        app.handle_action(Action::Submit);

        assert_eq!(app.state.focus, Panel::Resources);
        assert_eq!(
            app.state.resources.state().error_message(),
            Some(Panel::Resources.validation_message())
        );
    }

    #[tokio::test]
    async fn test_failed_request_uses_generic_message() {
        let mut app = app();
        app.state.focus = Panel::Resources;
        type_text(&mut app, "xss");
        app.handle_action(Action::Submit);
        pump(&mut app).await;

        assert_eq!(
            app.state.resources.state().error_message(),
            Some(Panel::Resources.failure_message())
        );
    }

    #[tokio::test]
    async fn test_pick_candidate_with_empty_enter() {
        let mut app = app();
        app.handle_action(Action::FocusNext);
        app.handle_action(Action::CycleLanguage);
        type_text(&mut app, "배");
        app.handle_action(Action::Submit);
        pump(&mut app).await;
        assert!(app.state.candidates_selectable());

        app.handle_action(Action::CandidateDown);
        app.handle_action(Action::ClearInput);
        app.handle_action(Action::Submit);
        assert!(matches!(
            app.state.wiki.phase(),
            EncyclopediaPhase::Forcing { candidate, .. } if candidate.as_str() == "배(2)"
        ));

        pump(&mut app).await;
        assert_eq!(app.state.wiki.article().unwrap().summary, "배(2) in en");
    }

    #[tokio::test]
    async fn test_submit_ignored_while_loading() {
        let mut app = app();
        type_text(&mut app, "https://a.example");
        app.handle_action(Action::Submit);
        let generation = app.state.summarize.generation();

        app.handle_action(Action::Submit);
        assert_eq!(app.state.summarize.generation(), generation);
        assert!(app.state.flash_message.is_some());
    }

    #[test]
    fn test_candidate_keys_only_act_on_encyclopedia() {
        let mut app = app();
        app.state.candidate_cursor = 1;
        app.handle_action(Action::CandidateUp);
        assert_eq!(app.state.candidate_cursor, 1);
    }
}
