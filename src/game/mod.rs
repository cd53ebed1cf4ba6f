//! Game lifecycle management.

pub mod manager;

pub use manager::{check_game_end, create_game, next_turn, start_game, GameBuilder};
