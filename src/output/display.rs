//! Display functions for the game board and end-of-game messages

use super::line::RenderedLine;
use colored::Colorize;
use std::collections::BTreeSet;
use std::time::Duration;

/// Print the full guess board, one rendered line per accepted guess
///
/// The board is replayed in full after every accepted guess so the
/// player always sees the complete history.
pub fn print_board(history: &[RenderedLine]) {
    for line in history {
        println!("{}", line.to_ansi());
    }
}

/// Format the absent-letter summary line
///
/// Letters arrive sorted (the set iterates in order); they are shown
/// uppercase on an azure background.
#[must_use]
pub fn absent_letters_line(absent: &BTreeSet<u8>) -> String {
    let letters: String = absent
        .iter()
        .map(|&b| b.to_ascii_uppercase() as char)
        .collect();

    letters.black().on_bright_cyan().to_string()
}

/// Print the win message
///
/// A first-try win carries no elapsed-time figure; otherwise the attempt
/// count and whole seconds since the first prompt are reported.
pub fn print_win(attempts: u32, elapsed: Option<Duration>) {
    println!();
    println!("{}", "Correct!".bright_green().bold());
    match elapsed {
        None => println!("Amazing luck! The solution was found at once."),
        Some(elapsed) => println!(
            "The solution was found after {attempts} tries in {} seconds.",
            elapsed.as_secs()
        ),
    }
}

/// Print the quit message; the secret word is never revealed
pub fn print_game_over() {
    println!("The game is over.");
}
