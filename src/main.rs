//! Words Virtuoso - CLI
//!
//! Loads and validates the two word list files, picks a secret word, and
//! runs the interactive game loop.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use words_virtuoso::{
    commands::run_play,
    game::Game,
    wordlists::{Dictionary, ListKind, check_candidates, choose_secret, load_word_list},
};

#[derive(Parser)]
#[command(
    name = "words_virtuoso",
    about = "Terminal word-guessing game with colored per-letter feedback",
    version,
    author
)]
struct Cli {
    /// File with all acceptable guess words
    words_file: String,

    /// File with the candidate words the secret is drawn from
    candidates_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_word_list(&cli.words_file, ListKind::Words)?;
    let candidates = load_word_list(&cli.candidates_file, ListKind::Candidates)?;

    check_candidates(&words, &candidates, &cli.words_file)?;

    let secret = choose_secret(&candidates)
        .with_context(|| format!("The {} file holds no words.", cli.candidates_file))?;

    println!("Words Virtuoso");

    let game = Game::new(Dictionary::new(words), secret);
    run_play(game).map_err(|e| anyhow!(e))
}
