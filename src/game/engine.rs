//! Turn loop engine
//!
//! Each turn flows one way: raw input through the validator, then (if
//! accepted) the scorer and renderer. The engine owns the only mutable
//! state and reports terminal states as return values; the CLI shell
//! decides what termination means for the process.

use super::input::{GuessInput, RejectReason, parse_guess};
use super::state::{GameState, Outcome};
use crate::core::{GuessResult, Word};
use crate::output::{RenderedLine, absent_letters};
use crate::wordlists::Dictionary;
use std::time::Duration;

/// Result of feeding one input line to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input rejected; print the reason and re-prompt, no counters change
    Rejected(RejectReason),
    /// Guess accepted and scored; the game continues
    Continue,
    /// The guess matched the secret word
    ///
    /// `elapsed` is `None` for a first-try win: that message variant
    /// carries no time figure.
    Won {
        attempts: u32,
        elapsed: Option<Duration>,
    },
    /// The player submitted the quit command
    Quit,
}

/// One game: the dictionary, the fixed secret word, and the turn state
#[derive(Debug)]
pub struct Game {
    dictionary: Dictionary,
    secret: Word,
    state: GameState,
}

impl Game {
    /// Start a game
    ///
    /// Both inputs come pre-validated from the setup phase: the secret
    /// is a member of the dictionary and the dictionary holds only
    /// conforming words. The engine does not re-check either.
    #[must_use]
    pub fn new(dictionary: Dictionary, secret: Word) -> Self {
        Self {
            dictionary,
            secret,
            state: GameState::new(),
        }
    }

    /// Note that the prompt is being shown
    ///
    /// The first call starts the elapsed-time clock; rejected inputs
    /// count toward elapsed time because the clock runs from the first
    /// prompt, not the first accepted guess.
    pub fn begin_turn(&mut self) {
        self.state.mark_prompted();
    }

    /// Process one raw input line
    ///
    /// Malformed input never escapes as an error: every failure becomes
    /// a `Rejected` outcome with a user-facing reason.
    pub fn step(&mut self, raw: &str) -> TurnOutcome {
        let guess = match parse_guess(raw, &self.dictionary) {
            Ok(GuessInput::Quit) => {
                self.state.finish(Outcome::Quit);
                return TurnOutcome::Quit;
            }
            Ok(GuessInput::Guess(word)) => word,
            Err(reason) => return TurnOutcome::Rejected(reason),
        };

        self.state.count_attempt();

        let result = GuessResult::score(&guess, &self.secret);
        self.state.push_line(RenderedLine::new(&guess, &result));

        if result.is_win() {
            self.state.finish(Outcome::Won);
            let attempts = self.state.attempts();
            let elapsed = if attempts == 1 {
                None
            } else {
                self.state.elapsed()
            };
            return TurnOutcome::Won { attempts, elapsed };
        }

        self.state.add_absent(absent_letters(&guess, &result));
        TurnOutcome::Continue
    }

    /// The cross-turn state (history, absent letters, counters)
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(words: &[&str], secret: &str) -> Game {
        let dictionary = Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()));
        Game::new(dictionary, Word::new(secret).unwrap())
    }

    #[test]
    fn rejected_input_changes_nothing() {
        let mut g = game(&["crane", "board"], "crane");
        g.begin_turn();

        assert_eq!(
            g.step("abc"),
            TurnOutcome::Rejected(RejectReason::WrongLength)
        );
        assert_eq!(
            g.step("slate"),
            TurnOutcome::Rejected(RejectReason::NotInDictionary)
        );

        assert_eq!(g.state().attempts(), 0);
        assert!(g.state().history().is_empty());
        assert_eq!(g.state().outcome(), Outcome::InProgress);
    }

    #[test]
    fn accepted_guess_appends_history_and_absent() {
        let mut g = game(&["crane", "board"], "crane");
        g.begin_turn();

        assert_eq!(g.step("board"), TurnOutcome::Continue);
        assert_eq!(g.state().attempts(), 1);
        assert_eq!(g.state().history().len(), 1);
        assert_eq!(g.state().history()[0].to_tags(), "--YY-");

        let absent: Vec<u8> = g.state().absent().iter().copied().collect();
        assert_eq!(absent, vec![b'b', b'd', b'o']);
    }

    #[test]
    fn win_on_first_try_has_no_elapsed() {
        let mut g = game(&["crane", "board"], "crane");
        g.begin_turn();

        assert_eq!(
            g.step("crane"),
            TurnOutcome::Won {
                attempts: 1,
                elapsed: None
            }
        );
        assert_eq!(g.state().outcome(), Outcome::Won);
        assert_eq!(g.state().history()[0].to_tags(), "GGGGG");
    }

    #[test]
    fn win_after_misses_reports_attempts_and_elapsed() {
        let mut g = game(&["crane", "board", "least"], "crane");
        g.begin_turn();
        assert_eq!(g.step("board"), TurnOutcome::Continue);

        g.begin_turn();
        match g.step("crane") {
            TurnOutcome::Won { attempts, elapsed } => {
                assert_eq!(attempts, 2);
                assert!(elapsed.is_some());
            }
            other => panic!("expected win, got {other:?}"),
        }

        // Both guesses stay on the board
        assert_eq!(g.state().history().len(), 2);
    }

    #[test]
    fn quit_counts_no_attempt() {
        let mut g = game(&["crane"], "crane");
        g.begin_turn();

        assert_eq!(g.step("exit"), TurnOutcome::Quit);
        assert_eq!(g.state().attempts(), 0);
        assert_eq!(g.state().outcome(), Outcome::Quit);
        assert!(g.state().history().is_empty());
    }

    #[test]
    fn absent_set_never_holds_credited_letters() {
        let mut g = game(&["crane", "board", "least", "acorn"], "crane");

        g.begin_turn();
        g.step("board");
        g.begin_turn();
        g.step("least");
        g.begin_turn();
        g.step("acorn");

        // Every letter of the secret stays out of the absent set
        for letter in b"crane" {
            assert!(!g.state().absent().contains(letter));
        }

        // Letters absent from CRANE across all guesses are all recorded
        for letter in b"bdolst" {
            assert!(
                g.state().absent().contains(letter),
                "expected {} in absent set",
                *letter as char
            );
        }
    }

    #[test]
    fn validator_failures_never_panic_the_loop() {
        let mut g = game(&["crane"], "crane");
        g.begin_turn();

        for raw in ["", "  ", "ab1de", "héllo", "aaaaaaaaaa", "exit "] {
            assert!(matches!(g.step(raw), TurnOutcome::Rejected(_)));
        }
        assert_eq!(g.state().outcome(), Outcome::InProgress);
    }
}
