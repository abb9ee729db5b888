//! Application coordinator
//!
//! Routes input to the game session, drives the countdown ticker and turns
//! session notifications into presentation state:
//! - Menu: waiting for the first game
//! - Playing: board, timer, feedback
//! - Over: results and replay

use log::{debug, info};
use std::time::{Duration, Instant};

use super::state::{GameSession, SessionEvent, SessionPhase};
use super::timer::Ticker;

/// How long a judgment message stays on screen
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// A transient message shown after a word is judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub accepted: bool,
    shown_at: Instant,
}

impl Feedback {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= FEEDBACK_DURATION
    }
}

/// Main application coordinator
pub struct AppCoordinator {
    pub session: GameSession,
    ticker: Ticker,
    feedback: Option<Feedback>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppCoordinator {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            ticker: Ticker::default(),
            feedback: None,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start or replay a game. Ignored while a game is running.
    pub fn start(&mut self, now: Instant) {
        if self.session.is_playing() {
            return;
        }
        self.session.start();
        self.ticker.start(now);
        self.feedback = None;
        self.process_events(now);
    }

    /// Enter/Space: start from the menu or the results screen
    pub fn confirm(&mut self, now: Instant) {
        self.start(now);
    }

    /// Esc: end the running game, or quit from any other screen
    pub fn back(&mut self, now: Instant) {
        if self.session.is_playing() {
            self.session.force_game_over();
            self.process_events(now);
        } else {
            self.quit();
        }
    }

    pub fn cell_engage(&mut self, index: usize, now: Instant) {
        self.session.cell_engage(index);
        self.process_events(now);
    }

    pub fn cell_enter(&mut self, index: usize, now: Instant) {
        self.session.cell_enter(index);
        self.process_events(now);
    }

    pub fn gesture_release(&mut self, now: Instant) {
        self.session.gesture_release();
        self.process_events(now);
    }

    /// Fire due countdown ticks and expire stale feedback
    pub fn poll(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.session.tick();
        }
        self.process_events(now);

        if self.feedback.as_ref().is_some_and(|f| f.is_expired(now)) {
            self.feedback = None;
        }
    }

    /// How long the event loop may wait before the next poll
    pub fn next_wakeup(&self, now: Instant, max: Duration) -> Duration {
        self.ticker
            .time_until_next(now)
            .map_or(max, |until| until.min(max))
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    fn process_events(&mut self, now: Instant) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::PhaseChanged { from, to } => {
                    info!("phase {} -> {}", from.label(), to.label());
                    if to != SessionPhase::Playing {
                        self.ticker.cancel();
                    }
                    if to == SessionPhase::Over {
                        info!(
                            "game over: score {}, {} words",
                            self.session.score(),
                            self.session.found_words().len()
                        );
                    }
                }
                SessionEvent::Judged { outcome } => {
                    debug!("judged {:?}", outcome);
                    self.feedback = Some(Feedback {
                        text: outcome.message(),
                        accepted: outcome.is_accepted(),
                        shown_at: now,
                    });
                }
                SessionEvent::ScoreChanged { delta, total } => {
                    debug!("score +{} = {}", delta, total);
                }
                SessionEvent::TimeChanged { remaining } => {
                    if remaining <= 10 {
                        debug!("{}s remaining", remaining);
                    }
                }
            }
        }
    }
}
