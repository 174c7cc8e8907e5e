//! Game engine: validation, turn loop, and cross-turn state
//!
//! The engine is a state machine over {AwaitingInput, Scoring, Won,
//! Quit}. `Game::step` drives one turn and returns terminal states as
//! values instead of exiting the process.

mod engine;
mod input;
mod state;

pub use engine::{Game, TurnOutcome};
pub use input::{GuessInput, QUIT_COMMAND, RejectReason, parse_guess};
pub use state::{GameState, Outcome};
