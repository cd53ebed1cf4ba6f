//! The rules engine: move legality, dice-usage enumeration, and
//! whole-turn validation.
//!
//! Everything here is a pure function over `GameState`; speculative work
//! runs on clones and illegality is reported as `false`, never as an
//! error and never as a mutation.

pub mod combinations;
pub mod engine;

pub use combinations::{
    all_move_combinations, replay_on_clone, valid_turn_moves, validate_turn_move,
};
pub use engine::{has_player_won, is_valid_move};
