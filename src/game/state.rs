//! Cross-turn game state
//!
//! One `GameState` value holds everything that survives between turns:
//! the attempt counter, the lazily-captured clock, the rendered guess
//! history, the cumulative absent-letter set, and the outcome. The turn
//! loop owns it exclusively; validator, scorer, and renderer stay pure.

use crate::output::RenderedLine;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Terminal status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Quit,
}

/// All state owned by the turn loop
#[derive(Debug, Clone)]
pub struct GameState {
    attempts: u32,
    started: Option<Instant>,
    history: Vec<RenderedLine>,
    absent: BTreeSet<u8>,
    outcome: Outcome,
}

impl GameState {
    /// Fresh state: zero attempts, clock unset, empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempts: 0,
            started: None,
            history: Vec::new(),
            absent: BTreeSet::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start the clock the first time the prompt is shown
    ///
    /// The clock starts at the first prompt, not at the first accepted
    /// guess, so time spent on rejected inputs counts. Later calls are
    /// no-ops.
    pub(crate) fn mark_prompted(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Count one accepted guess
    pub(crate) fn count_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Append a rendered guess to the board history
    pub(crate) fn push_line(&mut self, line: RenderedLine) {
        self.history.push(line);
    }

    /// Union newly confirmed absent letters into the cumulative set
    ///
    /// Idempotent and monotone: the set only grows.
    pub(crate) fn add_absent(&mut self, letters: impl IntoIterator<Item = u8>) {
        self.absent.extend(letters);
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Accepted guesses so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Rendered guess lines in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RenderedLine] {
        &self.history
    }

    /// Letters confirmed absent, iterated in alphabetical order
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> &BTreeSet<u8> {
        &self.absent
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Wall-clock time since the first prompt, if one was shown
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started.map(|started| started.elapsed())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
