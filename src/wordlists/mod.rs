//! Word lists for the game
//!
//! The dictionary is the universe of acceptable guesses; the candidate
//! list is the subset the secret word is drawn from. Both are loaded from
//! files before the game starts and never change afterwards.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;

pub use loader::{ListKind, LoadError, check_candidates, load_word_list};

/// Immutable set of acceptable guess words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from validated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check membership of an already-validated word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Pick the secret word uniformly at random from the candidate list
///
/// Returns `None` only for an empty candidate list, which the loader
/// rules out before a game starts.
#[must_use]
pub fn choose_secret(candidates: &[Word]) -> Option<Word> {
    use rand::prelude::IndexedRandom;

    candidates.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn dictionary_membership() {
        let dict = Dictionary::new([word("crane"), word("board"), word("least")]);

        assert_eq!(dict.len(), 3);
        assert!(dict.contains(&word("crane")));
        assert!(dict.contains(&word("CRANE"))); // Case-insensitive via Word
        assert!(!dict.contains(&word("slate")));
    }

    #[test]
    fn dictionary_deduplicates() {
        let dict = Dictionary::new([word("crane"), word("CRANE")]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn choose_secret_comes_from_candidates() {
        let candidates = vec![word("crane"), word("board")];

        for _ in 0..20 {
            let secret = choose_secret(&candidates).unwrap();
            assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn choose_secret_empty_candidates() {
        assert!(choose_secret(&[]).is_none());
    }
}
