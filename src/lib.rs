//! Words Virtuoso
//!
//! A terminal word-guessing game: guess the hidden five-letter word and
//! get colored per-letter feedback each turn.
//!
//! # Quick Start
//!
//! ```rust
//! use words_virtuoso::core::{GuessResult, Word};
//! use words_virtuoso::output::RenderedLine;
//!
//! let guess = Word::new("board").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let result = GuessResult::score(&guess, &secret);
//! let line = RenderedLine::new(&guess, &result);
//! assert_eq!(line.to_tags(), "--YY-");
//! ```

// Core domain types
pub mod core;

// Turn loop and validation
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
