//! Turn orchestration for callers: roll, list options, execute.

pub mod handler;

pub use handler::{execute_turn_move, roll_dice, valid_turn_moves};
