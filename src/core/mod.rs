//! Core engine types: players, tokens, state, configuration, RNG.
//!
//! These are the fundamental building blocks every other module composes.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;
pub mod token;

pub use config::{CaptureMode, DiceMode, GameConfig};
pub use player::{Color, Player, PlayerId, PlayerStatus};
pub use rng::{DiceRng, DiceRngState};
pub use state::{GameId, GameState, GameStatus};
pub use token::{Token, TokenId, TokenState, FINISHED_POSITION, HOME_POSITION};
