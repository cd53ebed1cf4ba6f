//! Engine error type.
//!
//! Illegal moves are not errors: legality predicates return `false` and
//! never mutate state. `LudoError` covers structural misuse — references
//! to things that do not exist, or lifecycle transitions the state
//! machine forbids — and every such failure short-circuits before any
//! mutation begins.

use thiserror::Error;

use crate::core::player::PlayerId;
use crate::core::state::GameStatus;
use crate::core::token::TokenId;

/// Structural engine errors.
#[derive(Debug, Error)]
pub enum LudoError {
    #[error("{0} does not exist in this game")]
    UnknownToken(TokenId),

    #[error("{0} does not exist in this game")]
    UnknownPlayer(PlayerId),

    #[error("cannot start a game in status {0:?}")]
    InvalidTransition(GameStatus),

    #[error("snapshot codec: {0}")]
    Snapshot(#[from] bincode::Error),
}
