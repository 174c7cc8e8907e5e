//! Terminal output
//!
//! Rendered guess lines as data, plus the ANSI adapter that puts them on
//! screen.

pub mod display;
pub mod line;

pub use display::{absent_letters_line, print_board, print_game_over, print_win};
pub use line::{RenderedLine, Tile, absent_letters, verdict_tag};
