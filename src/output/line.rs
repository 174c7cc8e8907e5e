//! Rendered guess lines
//!
//! A `RenderedLine` is pure data: five tiles, each an uppercase letter
//! paired with its verdict. The verdict-to-style mapping is fixed and
//! injective, so tests assert on tags while the terminal adapter decides
//! the actual escape codes.

use crate::core::{GuessResult, Verdict, Word};
use colored::Colorize;

/// One letter of a rendered guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub verdict: Verdict,
}

/// Visual tag for a verdict: 'G' exact, 'Y' present, '-' absent
#[must_use]
pub const fn verdict_tag(verdict: Verdict) -> char {
    match verdict {
        Verdict::Exact => 'G',
        Verdict::Present => 'Y',
        Verdict::Absent => '-',
    }
}

/// A fully rendered guess: five tiles in position order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    tiles: [Tile; 5],
}

impl RenderedLine {
    /// Render a scored guess into tiles
    ///
    /// Pure: rendering the same (guess, result) pair twice yields the
    /// same line.
    #[must_use]
    pub fn new(guess: &Word, result: &GuessResult) -> Self {
        let mut tiles = [Tile {
            letter: ' ',
            verdict: Verdict::Absent,
        }; 5];

        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = Tile {
                letter: guess.chars()[i].to_ascii_uppercase() as char,
                verdict: result.verdict_at(i),
            };
        }

        Self { tiles }
    }

    /// The tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; 5] {
        &self.tiles
    }

    /// The uppercase guess letters without styling
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    /// The verdict tags in position order, e.g. "--YY-"
    #[must_use]
    pub fn to_tags(&self) -> String {
        self.tiles.iter().map(|t| verdict_tag(t.verdict)).collect()
    }

    /// ANSI-colored form for terminal display
    ///
    /// Exact is black on green, Present black on yellow, Absent black on
    /// white, matching the tag mapping tile for tile.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| {
                let cell = tile.letter.to_string();
                let styled = match tile.verdict {
                    Verdict::Exact => cell.black().on_bright_green(),
                    Verdict::Present => cell.black().on_bright_yellow(),
                    Verdict::Absent => cell.black().on_white(),
                };
                styled.to_string()
            })
            .collect()
    }
}

/// Letters confirmed absent by a scored guess, lowercased
///
/// A letter qualifies only when every position holding it is verdicted
/// `Absent`: a letter that scores Exact or Present anywhere in the guess
/// is in the secret and must never reach the absent set, even if a
/// duplicate occurrence of it was verdicted Absent.
#[must_use]
pub fn absent_letters(guess: &Word, result: &GuessResult) -> Vec<u8> {
    let in_secret: Vec<u8> = (0..5)
        .filter(|&i| result.verdict_at(i) != Verdict::Absent)
        .map(|i| guess.chars()[i])
        .collect();

    let mut letters: Vec<u8> = (0..5)
        .filter(|&i| result.verdict_at(i) == Verdict::Absent)
        .map(|i| guess.chars()[i])
        .filter(|letter| !in_secret.contains(letter))
        .collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}
