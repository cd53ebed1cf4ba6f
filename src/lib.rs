//! # ludo-engine
//!
//! A configurable Ludo rules and move-execution core: a pure, synchronous
//! state machine that decides whether a proposed turn is legal, enumerates
//! every legal way to spend a dice roll, and applies moves with their side
//! effects (captures, home-column entry, finishing).
//!
//! ## Design Principles
//!
//! 1. **One executor**: validation replays moves through the same
//!    `execute_move` that live execution uses, on deep clones, so the two
//!    can never diverge.
//!
//! 2. **Legality is boolean**: illegal moves and turns are the dominant
//!    path; they return `false` without mutating anything. Errors are
//!    reserved for structural misuse (unknown IDs, forbidden lifecycle
//!    transitions).
//!
//! 3. **Deterministic**: the only randomness is the dice draw, backed by a
//!    seedable, forkable RNG. Given a state and a move sequence the
//!    outcome is fully reproducible.
//!
//! 4. **Caller-owned state**: the core holds no storage and no locks; one
//!    `GameState` value is created, mutated in place one turn at a time,
//!    and snapshot-serialized by the surrounding session layer.
//!
//! ## Modules
//!
//! - `core`: players, colors, tokens, configuration, state, RNG
//! - `board`: ring occupancy and zone-aware position arithmetic
//! - `moves`: move/roll shapes and the move executor
//! - `rules`: legality, dice-usage enumeration, whole-turn validation
//! - `actions`: roll dice, list legal turns, execute a validated turn
//! - `game`: lifecycle (create, start, rotate turns, detect the winner)
//! - `snapshot`: loss-free bincode snapshots for the session layer
//!
//! ## Turn flow
//!
//! ```
//! use ludo_engine::{actions, game, rules};
//! use ludo_engine::game::GameBuilder;
//!
//! let mut state = GameBuilder::new().player_count(2).build(42);
//! game::start_game(&mut state).unwrap();
//!
//! let roll = actions::roll_dice(&mut state);
//! let player = state.current_player().id;
//!
//! let options = actions::valid_turn_moves(&state, player, &roll.values);
//! if let Some(turn) = options.first() {
//!     assert!(rules::validate_turn_move(&state, turn));
//!     actions::execute_turn_move(&mut state, turn).unwrap();
//! }
//!
//! game::check_game_end(&mut state);
//! game::next_turn(&mut state, roll.can_move_again);
//! ```

pub mod actions;
pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod moves;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    CaptureMode, Color, DiceMode, DiceRng, DiceRngState, GameConfig, GameId, GameState,
    GameStatus, Player, PlayerId, PlayerStatus, Token, TokenId, TokenState, FINISHED_POSITION,
    HOME_POSITION,
};

pub use crate::board::{Board, HOME_COLUMN_SLOTS, RING_SQUARES, SAFE_SQUARES};

pub use crate::moves::{
    execute_move, DiceRoll, DiceValues, MoveOutcome, MoveSequence, TokenMove, TurnMove,
    TurnOutcome, TurnRecord,
};

pub use crate::rules::{
    all_move_combinations, has_player_won, is_valid_move, valid_turn_moves, validate_turn_move,
};

pub use crate::actions::{execute_turn_move, roll_dice};

pub use crate::game::{check_game_end, create_game, next_turn, start_game, GameBuilder};

pub use crate::error::LudoError;

pub use crate::snapshot::GameSnapshot;
