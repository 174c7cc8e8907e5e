//! Word list loading and validation
//!
//! Both input files must contain only conforming words: exactly five
//! ASCII letters with no letter repeated. Every candidate word must also
//! appear in the main words file. Violations are counted and reported
//! before the game starts; the engine itself never re-checks them.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::path::Path;

/// Which of the two input lists a loader error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Words,
    Candidates,
}

impl ListKind {
    #[must_use]
    const fn label(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Candidates => "candidate words",
        }
    }
}

/// Error type for word list loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read
    Missing { kind: ListKind, path: String },
    /// Lines that are not five distinct letters
    InvalidWords { count: usize, path: String },
    /// Candidate words absent from the main words list
    UncoveredCandidates { count: usize, path: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { kind, path } => {
                write!(f, "The {} file {path} doesn't exist.", kind.label())
            }
            Self::InvalidWords { count, path } => {
                write!(f, "{count} invalid words were found in the {path} file.")
            }
            Self::UncoveredCandidates { count, path } => {
                write!(
                    f,
                    "{count} candidate words are not included in the {path} file."
                )
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load and validate a word list file
///
/// A conforming line is exactly five ASCII letters with no letter
/// repeated. Blank lines are skipped; every other non-conforming line is
/// counted and reported as a single `InvalidWords` error.
///
/// # Errors
/// Returns `Missing` if the file cannot be read, or `InvalidWords` if
/// any line fails validation.
pub fn load_word_list<P: AsRef<Path>>(path: P, kind: ListKind) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|_| LoadError::Missing {
        kind,
        path: path.display().to_string(),
    })?;

    let mut words = Vec::new();
    let mut invalid = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) if !word.has_repeated_letters() => words.push(word),
            _ => invalid += 1,
        }
    }

    if invalid > 0 {
        return Err(LoadError::InvalidWords {
            count: invalid,
            path: path.display().to_string(),
        });
    }

    Ok(words)
}

/// Check that every candidate appears in the main words list
///
/// The reported path is the words file: candidates are only legal when
/// the main list covers them.
///
/// # Errors
/// Returns `UncoveredCandidates` with the number of missing words.
pub fn check_candidates(
    words: &[Word],
    candidates: &[Word],
    words_path: &str,
) -> Result<(), LoadError> {
    let missing = candidates.iter().filter(|c| !words.contains(c)).count();

    if missing > 0 {
        return Err(LoadError::UncoveredCandidates {
            count: missing,
            path: words_path.to_string(),
        });
    }

    Ok(())
}
