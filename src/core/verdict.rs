//! Per-letter guess scoring
//!
//! A `GuessResult` records one `Verdict` per guess position:
//! - `Exact`: same letter, same position
//! - `Present`: letter occurs in the secret at a different position
//! - `Absent`: letter does not occur in the secret
//!
//! Scoring uses a two-pass remaining-count algorithm so a guess never
//! claims `Present` credit for a letter more times than that letter
//! actually occurs in the secret.

use super::Word;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

/// Ordered per-letter verdicts for one guess
///
/// Position i holds the verdict for the guess's i-th letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult([Verdict; 5]);

impl GuessResult {
    /// All exact (winning guess)
    pub const WIN: Self = Self([Verdict::Exact; 5]);

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume one
    ///    occurrence of each matched letter from the secret's
    ///    remaining-count pool
    /// 2. Second pass: for positions not exact, mark `Present` while the
    ///    pool still holds that letter, otherwise `Absent`
    ///
    /// Dictionary words never repeat a letter, so for accepted guesses
    /// this reduces to a position/containment check. The remaining-count
    /// discipline is kept because it stays correct for secrets (or a
    /// future relaxed dictionary) with duplicate letters.
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::{GuessResult, Verdict, Word};
    ///
    /// let guess = Word::new("board").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let result = GuessResult::score(&guess, &secret);
    ///
    /// // B(absent) O(absent) A(present) R(present) D(absent)
    /// assert_eq!(result.verdict_at(2), Verdict::Present);
    /// assert_eq!(result.verdict_at(3), Verdict::Present);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; 5];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                verdicts[i] = Verdict::Exact;

                // Consume from the remaining pool
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-wrong-position from the remaining pool
        // Allow: Index needed to access guess[i] and check/set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if verdicts[i] != Verdict::Exact {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    verdicts[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(verdicts)
    }

    /// Check if every verdict is `Exact` (the guess equals the secret)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0 == [Verdict::Exact; 5]
    }

    /// Get the verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Get all verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; 5] {
        &self.0
    }

    /// Count verdicts equal to `wanted`
    #[must_use]
    pub fn count(self, wanted: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == wanted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_guess_equals_secret() {
        for s in ["crane", "slate", "speed", "aaaaa"] {
            let w = word(s);
            let result = GuessResult::score(&w, &w);
            assert_eq!(result, GuessResult::WIN);
            assert!(result.is_win());
        }
    }

    #[test]
    fn score_no_shared_letters() {
        let result = GuessResult::score(&word("abcde"), &word("fghij"));
        assert_eq!(result.verdicts(), &[Verdict::Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn score_board_against_crane() {
        // B(absent) O(absent) A(present) R(present) D(absent)
        let result = GuessResult::score(&word("board"), &word("crane"));
        assert_eq!(
            result.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn score_crane_against_slate() {
        // C(absent) R(absent) A(exact) N(absent) E(exact)
        let result = GuessResult::score(&word("crane"), &word("slate"));
        assert_eq!(result.count(Verdict::Exact), 2);
        assert_eq!(result.count(Verdict::Present), 0);
        assert_eq!(result.verdict_at(2), Verdict::Exact);
        assert_eq!(result.verdict_at(4), Verdict::Exact);
    }

    #[test]
    fn score_duplicate_letters_in_secret() {
        // SPEED vs ERASE: both E's in the guess are present because
        // ERASE holds two E's
        let result = GuessResult::score(&word("speed"), &word("erase"));
        assert_eq!(
            result.verdicts(),
            &[
                Verdict::Present, // S
                Verdict::Absent,  // P
                Verdict::Present, // E
                Verdict::Present, // E
                Verdict::Absent,  // D
            ]
        );
    }

    #[test]
    fn score_exact_consumes_before_present() {
        // ROBOT vs FLOOR: the second O is exact and consumes one O,
        // leaving one O for the first position's present
        let result = GuessResult::score(&word("robot"), &word("floor"));
        assert_eq!(
            result.verdicts(),
            &[
                Verdict::Present, // R
                Verdict::Present, // O
                Verdict::Absent,  // B
                Verdict::Exact,   // O
                Verdict::Absent,  // T
            ]
        );
    }

    #[test]
    fn score_present_credit_capped_by_occurrences() {
        // EAGLE vs CRANE: the secret holds one E, so only one of the
        // guess's two E's may score Exact/Present
        let result = GuessResult::score(&word("eagle"), &word("crane"));
        let e_credit = (0..5)
            .filter(|&i| word("eagle").chars()[i] == b'e')
            .filter(|&i| result.verdict_at(i) != Verdict::Absent)
            .count();
        assert_eq!(e_credit, 1);
        // The final E is exact, so the leading E gets no credit
        assert_eq!(result.verdict_at(4), Verdict::Exact);
        assert_eq!(result.verdict_at(0), Verdict::Absent);
    }

    #[test]
    fn score_exact_count_matches_positions() {
        let guess = word("least");
        let secret = word("crane");
        let result = GuessResult::score(&guess, &secret);

        let matching = (0..5)
            .filter(|&i| guess.chars()[i] == secret.chars()[i])
            .count();
        assert_eq!(result.count(Verdict::Exact), matching);
    }
}
