//! Interactive game loop
//!
//! Thin shell around the engine: prompt, read one line, feed it to
//! `Game::step`, and print what the outcome asks for. Terminal outcomes
//! end the loop; the process exits from `main`.

use crate::game::{Game, TurnOutcome};
use crate::output::{absent_letters_line, print_board, print_game_over, print_win};
use std::io::{self, Write};

/// Run the game until the player wins or quits
///
/// # Errors
///
/// Returns an error only for I/O failures reading user input; game rule
/// violations are handled in-loop with a reason and a re-prompt.
pub fn run_play(mut game: Game) -> Result<(), String> {
    loop {
        println!("Input a 5-letter word:");
        game.begin_turn();

        let raw = get_user_input()?;

        match game.step(raw.trim()) {
            TurnOutcome::Rejected(reason) => println!("{reason}"),
            TurnOutcome::Continue => {
                print_board(game.state().history());
                println!();
                println!("{}", absent_letters_line(game.state().absent()));
                println!();
            }
            TurnOutcome::Won { attempts, elapsed } => {
                print_board(game.state().history());
                print_win(attempts, elapsed);
                return Ok(());
            }
            TurnOutcome::Quit => {
                print_game_over();
                return Ok(());
            }
        }
    }
}

/// Read one line from stdin
fn get_user_input() -> Result<String, String> {
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
