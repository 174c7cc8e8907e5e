//! Guess validation
//!
//! A raw input line either quits the game, becomes an accepted guess, or
//! is rejected with a specific reason. Checks run in a fixed order and
//! the first failure wins, so every rejection names exactly one problem.

use crate::core::Word;
use crate::wordlists::Dictionary;
use std::fmt;

/// Reserved command that ends the game without a guess
///
/// Matched case-sensitively against the raw line before any other rule;
/// it is not a dictionary word.
pub const QUIT_COMMAND: &str = "exit";

/// An accepted input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    /// The quit sentinel
    Quit,
    /// A validated dictionary word, lowercased
    Guess(Word),
}

/// Why an input line was rejected
///
/// All reasons are recoverable: the caller prints the message and
/// re-prompts without consuming an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    WrongLength,
    InvalidCharacters,
    DuplicateLetters,
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength => write!(f, "The input isn't a 5-letter word."),
            Self::InvalidCharacters => {
                write!(f, "One or more letters of the input aren't valid.")
            }
            Self::DuplicateLetters => write!(f, "The input has duplicate letters."),
            Self::NotInDictionary => {
                write!(f, "The input word isn't included in my words list.")
            }
        }
    }
}

impl std::error::Error for RejectReason {}

/// Validate one raw input line
///
/// Rules in order, short-circuiting on the first failure:
/// 1. The quit sentinel is accepted as-is, skipping every other check
/// 2. Length must be exactly 5 characters
/// 3. Every character must be an ASCII letter
/// 4. No letter may repeat (case-insensitive)
/// 5. The lowercase form must be in the dictionary
///
/// Pure: no state is touched: the caller owns messaging and re-prompting.
///
/// # Errors
/// Returns the first `RejectReason` that applies.
pub fn parse_guess(raw: &str, dictionary: &Dictionary) -> Result<GuessInput, RejectReason> {
    if raw == QUIT_COMMAND {
        return Ok(GuessInput::Quit);
    }

    if raw.chars().count() != 5 {
        return Err(RejectReason::WrongLength);
    }

    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RejectReason::InvalidCharacters);
    }

    let lower = raw.to_ascii_lowercase();
    let mut seen = [false; 26];
    for letter in lower.bytes() {
        let slot = &mut seen[usize::from(letter - b'a')];
        if *slot {
            return Err(RejectReason::DuplicateLetters);
        }
        *slot = true;
    }

    // Length and characters already checked above
    let word = Word::new(lower).map_err(|_| RejectReason::InvalidCharacters)?;

    if !dictionary.contains(&word) {
        return Err(RejectReason::NotInDictionary);
    }

    Ok(GuessInput::Guess(word))
}
