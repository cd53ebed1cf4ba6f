//! Tokens and their positions.
//!
//! A token's position is a single `i16` spanning every zone it can occupy:
//!
//! - `HOME_POSITION` (-1): in the owner's home yard, not yet in play
//! - `0..52`: on the shared ring
//! - `home_column_start(color) .. home_column_start(color) + 5`: inside the
//!   owner color's private home column
//! - `FINISHED_POSITION`: done racing
//!
//! The `state` field mirrors what the position implies; the move executor
//! keeps the two in sync.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Position of a token still in its home yard.
pub const HOME_POSITION: i16 = -1;

/// Sentinel position for a token that has finished.
pub const FINISHED_POSITION: i16 = 100;

/// Unique token identifier within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Which zone a token occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenState {
    /// In the home yard; needs a six to come out.
    Home,
    /// On the shared 52-square ring.
    InPlay,
    /// Inside the owner color's private final stretch.
    HomeColumn,
    /// Done racing.
    Finished,
}

/// A single racing token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub owner: PlayerId,
    pub position: i16,
    pub state: TokenState,
}

impl Token {
    /// Create a fresh token in the home yard.
    #[must_use]
    pub const fn new(id: TokenId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            position: HOME_POSITION,
            state: TokenState::Home,
        }
    }

    /// Is this token still in its home yard?
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.state == TokenState::Home
    }

    /// Has this token finished?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == TokenState::Finished
    }

    /// Is this token on the shared ring?
    #[must_use]
    pub fn on_ring(&self) -> bool {
        self.state == TokenState::InPlay
    }
}
