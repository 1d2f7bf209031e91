//! Application state and the fetch lifecycle.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::data::{build_cards, Card, LastUpdated, Locale};
use crate::source::{FetchOutcome, Fetcher, StatusSnapshot, Trigger};
use crate::ui::Theme;

/// Where the dashboard is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded and cards are shown.
    Rendered,
    /// The last request failed and an error replaces the cards.
    Errored,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Data source
    fetcher: Fetcher,
    refresh_interval: Duration,
    next_refresh: Instant,
    pub phase: Phase,
    pub snapshot: Option<StatusSnapshot>,
    pub cards: Vec<Card>,
    pub load_error: Option<String>,

    // Navigation state
    pub selected_card: usize,
    pub detail_scroll: u16,

    // UI
    pub locale: Locale,
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App that loads snapshots through `fetcher`.
    pub fn new(fetcher: Fetcher, refresh_interval: Duration, locale: Locale, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            show_detail_overlay: false,
            fetcher,
            refresh_interval,
            next_refresh: Instant::now() + refresh_interval,
            phase: Phase::Idle,
            snapshot: None,
            cards: Vec::new(),
            load_error: None,
            selected_card: 0,
            detail_scroll: 0,
            locale,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.fetcher.description()
    }

    /// Kick off the initial load and start the refresh schedule.
    pub fn start(&mut self) {
        self.next_refresh = Instant::now() + self.refresh_interval;
        self.begin(Trigger::Startup);
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.fetcher.is_loading()
    }

    /// Whether the refresh control accepts input.
    pub fn refresh_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Manual refresh. Ignored (returns false) while a request is in flight.
    pub fn refresh(&mut self) -> bool {
        if !self.refresh_enabled() {
            return false;
        }
        self.begin(Trigger::Manual)
    }

    /// Fire the scheduled refresh if it is due at `now`.
    ///
    /// Returns true if a request was started. The schedule advances even when
    /// the tick is skipped because a request is already in flight.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_refresh {
            return false;
        }
        self.next_refresh = now + self.refresh_interval;
        self.begin(Trigger::Scheduled)
    }

    fn begin(&mut self, trigger: Trigger) -> bool {
        if self.fetcher.trigger(trigger).is_some() {
            self.phase = Phase::Loading;
            true
        } else {
            false
        }
    }

    /// Apply a finished fetch, if any.
    ///
    /// Returns true if the display changed.
    pub fn poll_fetch(&mut self) -> bool {
        match self.fetcher.poll() {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome.result {
            Ok(snapshot) => {
                self.cards = build_cards(&snapshot, self.locale);
                self.snapshot = Some(snapshot);
                self.load_error = None;
                self.phase = Phase::Rendered;

                // Clamp selection index
                if self.selected_card >= self.cards.len() {
                    self.selected_card = self.cards.len().saturating_sub(1);
                }
            }
            Err(e) => {
                self.cards.clear();
                self.snapshot = None;
                self.show_detail_overlay = false;
                self.load_error = Some(self.locale.load_failed(&e.to_string()));
                self.phase = Phase::Errored;
            }
        }
    }

    /// "Last updated" labels for the most recent successful snapshot.
    pub fn last_updated(&self, now: DateTime<Utc>) -> Option<LastUpdated> {
        self.snapshot.as_ref().map(|s| LastUpdated::new(s.timestamp, now, self.locale))
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// The currently selected card.
    pub fn selected(&self) -> Option<&Card> {
        self.cards.get(self.selected_card)
    }

    /// Move selection down by one card.
    pub fn select_next(&mut self) {
        let max = self.cards.len().saturating_sub(1);
        self.selected_card = (self.selected_card + 1).min(max);
        self.detail_scroll = 0;
    }

    /// Move selection up by one card.
    pub fn select_prev(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
        self.detail_scroll = 0;
    }

    /// Jump to the first card.
    pub fn select_first(&mut self) {
        self.selected_card = 0;
        self.detail_scroll = 0;
    }

    /// Jump to the last card.
    pub fn select_last(&mut self) {
        self.selected_card = self.cards.len().saturating_sub(1);
        self.detail_scroll = 0;
    }

    pub fn scroll_detail_down(&mut self, n: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(n);
    }

    pub fn scroll_detail_up(&mut self, n: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(n);
    }

    /// Open the detail overlay for the selected card.
    pub fn enter_detail(&mut self) {
        if self.selected().is_some() {
            self.show_detail_overlay = true;
            self.detail_scroll = 0;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current cards to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        let Some(ref snapshot) = self.snapshot else {
            anyhow::bail!("No data to export");
        };
        crate::export::write_cards(path, snapshot, &self.cards, self.source_description())
    }
}
