//! TUI application state and event handling.
//!
//! The `App` struct owns all interactive state and runs the main event loop
//! via `run()`. Three suggestion paths feed the screen:
//!
//! - **Bang chips**: recomputed synchronously from the registry on every
//!   keystroke, no debounce.
//! - **Bang list**: takes over the lower pane while the input starts with
//!   `!` and triggers still match it; Enter on a selected row completes the
//!   trigger into the input instead of searching.
//! - **Web suggestions**: fetched on a background thread after 300ms of
//!   input quiescence; results carry a fetch ticket and are applied only
//!   while that ticket is still the latest, so a slow stale fetch can never
//!   overwrite suggestions for newer input.
//!
//! With an empty input the lower pane shows the most recent searches
//! instead.
//!
//! Submitting a resolved bang opens the provider in the browser and keeps
//! the session running; submitting anything else hands the query to the
//! default web search and ends the session.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{ListContent, RenderState, render_ui};
use crate::dispatch::Navigator;
use crate::engine::{Dispatch, SearchEngine};
use crate::models::BangDefinition;
use crate::query::parse_query;
use crate::suggest::{
    Debouncer, FetchSequence, SuggestionFetcher, suggest_for_bang, suggest_for_query,
};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Recent searches shown in the lower pane (the stored log keeps more)
const HISTORY_DISPLAY_LIMIT: usize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    engine: SearchEngine,
    fetcher: Arc<SuggestionFetcher>,
    input: String,
    // Bang chips (local, synchronous)
    chips: Vec<BangDefinition>,
    selected_chip: Option<usize>,
    // Bang list for the lower pane, populated while the input starts with `!`
    bang_rows: Vec<BangDefinition>,
    // Web suggestions (network-backed, debounced)
    web_suggestions: Vec<String>,
    selected_row: Option<usize>,
    fetching: bool,
    debouncer: Debouncer,
    fetch_seq: FetchSequence,
    results_tx: Sender<(u64, Vec<String>)>,
    results_rx: Receiver<(u64, Vec<String>)>,
    // Status message and lifecycle
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(engine: SearchEngine, fetcher: SuggestionFetcher) -> Self {
        let (results_tx, results_rx) = channel();
        Self {
            engine,
            fetcher: Arc::new(fetcher),
            input: String::new(),
            chips: Vec::new(),
            selected_chip: None,
            bang_rows: Vec::new(),
            web_suggestions: Vec::new(),
            selected_row: None,
            fetching: false,
            debouncer: Debouncer::default(),
            fetch_seq: FetchSequence::new(),
            results_tx,
            results_rx,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        navigator: &mut dyn Navigator,
    ) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.apply_fetch_results();
            self.fire_pending_fetch();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| {
                    let state = self.render_state();
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(50))?;
            self.handle_action(action, navigator);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        let list = if self.input.trim().is_empty() {
            let entries = self.engine.history().entries();
            ListContent::History(&entries[..entries.len().min(HISTORY_DISPLAY_LIMIT)])
        } else if self.showing_bang_list() {
            ListContent::Bangs(&self.bang_rows)
        } else {
            ListContent::Suggestions(&self.web_suggestions)
        };

        let matched_bang = parse_query(&self.input)
            .trigger
            .and_then(|trigger| self.engine.registry().lookup(&trigger));

        RenderState {
            input: &self.input,
            matched_bang,
            chips: &self.chips,
            selected_chip: self.selected_chip,
            list,
            selected_row: self.selected_row,
            fetching: self.fetching,
            status_message: self.status_message.as_ref(),
            registry_len: self.engine.registry().len(),
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, navigator: &mut dyn Navigator) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.refresh_suggestions();
                    self.needs_redraw = true;
                }
            }
            Action::Input(c) => {
                self.input.push(c);
                self.refresh_suggestions();
                self.needs_redraw = true;
            }
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.refresh_suggestions();
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::NextChip => self.next_chip(),
            Action::AcceptChip => self.accept_chip(),
            Action::Submit => self.submit(navigator),
            Action::ClearHistory => {
                self.engine.clear_history();
                self.set_status("History cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Action::None => {}
        }
    }

    /// Recompute the local bang lists and (re)arm the debounced web fetch
    fn refresh_suggestions(&mut self) {
        self.chips =
            suggest_for_query(self.engine.registry(), &self.input).into_iter().cloned().collect();
        self.bang_rows =
            suggest_for_bang(self.engine.registry(), &self.input).into_iter().cloned().collect();
        self.selected_chip = None;
        self.selected_row = None;

        // A pending or in-flight fetch is stale the moment the input changes
        self.fetch_seq.invalidate();
        self.fetching = false;

        match self.web_fetch_query() {
            Some(query) => self.debouncer.submit(&query),
            None => {
                self.debouncer.cancel();
                self.web_suggestions.clear();
            }
        }
    }

    /// Free-text query for the network suggestion path: the remainder when a
    /// bang has been typed, the raw input otherwise. A bang with no search
    /// term yet fetches nothing.
    fn web_fetch_query(&self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let parsed = parse_query(&self.input);
        if parsed.has_trigger() {
            let term = parsed.remainder.trim();
            return (!term.is_empty()).then(|| term.to_string());
        }
        if self.input.starts_with('!') {
            // Incomplete bang marker, nothing useful to complete yet
            return None;
        }
        Some(self.input.clone())
    }

    /// Start a background fetch once the debouncer reports quiescence
    fn fire_pending_fetch(&mut self) {
        let Some(query) = self.debouncer.ready() else {
            return;
        };

        let ticket = self.fetch_seq.next();
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.results_tx.clone();
        self.fetching = true;
        self.needs_redraw = true;

        thread::spawn(move || {
            let suggestions = fetcher.fetch(&query);
            // Receiver may be gone on shutdown
            let _ = tx.send((ticket, suggestions));
        });
    }

    /// Apply completed fetches, discarding any with a stale ticket
    fn apply_fetch_results(&mut self) {
        while let Ok((ticket, suggestions)) = self.results_rx.try_recv() {
            if !self.fetch_seq.is_latest(ticket) {
                continue;
            }
            self.web_suggestions = suggestions;
            self.selected_row = None;
            self.fetching = false;
            self.needs_redraw = true;
        }
    }

    /// The bang list claims the lower pane as long as something matches;
    /// once the filter comes up empty the pane falls back to web suggestions
    fn showing_bang_list(&self) -> bool {
        !self.input.trim().is_empty() && !self.bang_rows.is_empty()
    }

    fn current_list_len(&self) -> usize {
        if self.input.trim().is_empty() {
            self.engine.history().len().min(HISTORY_DISPLAY_LIMIT)
        } else if self.showing_bang_list() {
            self.bang_rows.len()
        } else {
            self.web_suggestions.len()
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.current_list_len();
        if len == 0 {
            self.selected_row = None;
            return;
        }

        let next = match self.selected_row {
            None if delta > 0 => 0,
            None => len - 1,
            Some(idx) => (idx as isize + delta).rem_euclid(len as isize) as usize,
        };
        self.selected_row = Some(next);
        self.needs_redraw = true;
    }

    fn next_chip(&mut self) {
        if self.chips.is_empty() {
            self.selected_chip = None;
            return;
        }
        self.selected_chip =
            Some(self.selected_chip.map_or(0, |idx| (idx + 1) % self.chips.len()));
        self.needs_redraw = true;
    }

    /// Replace the input with the selected chip's trigger, ready for a term
    fn accept_chip(&mut self) {
        let Some(chip) = self.selected_chip.and_then(|idx| self.chips.get(idx)) else {
            return;
        };
        self.input = format!("!{} ", chip.trigger);
        self.refresh_suggestions();
        self.needs_redraw = true;
    }

    fn submit(&mut self, navigator: &mut dyn Navigator) {
        // Enter on a selected bang row completes the trigger into the input
        // rather than searching
        if let Some(idx) = self.selected_row
            && self.showing_bang_list()
        {
            if let Some(bang) = self.bang_rows.get(idx) {
                self.input = format!("!{} ", bang.trigger);
                self.refresh_suggestions();
            }
            self.needs_redraw = true;
            return;
        }

        // A selected suggestion or history row takes precedence over the
        // typed input
        let query = match (self.selected_row, self.input.trim().is_empty()) {
            (Some(idx), true) => {
                self.engine.history().entries().get(idx).cloned().unwrap_or_default()
            }
            (Some(idx), false) => self.web_suggestions.get(idx).cloned().unwrap_or_default(),
            (None, _) => self.input.clone(),
        };

        match self.engine.submit(&query, navigator) {
            Ok(Dispatch::Provider { name, .. }) => {
                self.input.clear();
                self.refresh_suggestions();
                self.set_status(
                    format!("Opened {name}"),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Ok(Dispatch::DefaultSearch { .. }) => {
                // Leaving the tool
                self.should_quit = true;
            }
            Ok(Dispatch::None) => {}
            Err(e) => {
                self.set_status(
                    format!("Failed to open browser: {e:#}"),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
        self.needs_redraw = true;
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }
}
