//! Player identification, colors, and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Games seat 2-4 players in the fixed
//! `Color::ALL` turn order, so `PlayerId(n)` always plays `Color::ALL[n]`.
//!
//! ## Color
//!
//! Each color owns a fixed slice of board geometry: a start square where
//! tokens leave home, an entry square after which the token turns off the
//! shared ring into its private home column, and the numeric range of that
//! column.

use serde::{Deserialize, Serialize};

use super::token::{Token, TokenId};

/// Player identifier, 0-based seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Token color. Doubles as the seat order: play always proceeds
/// red, blue, green, yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Fixed turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Ring square where this color's tokens enter play from home.
    #[must_use]
    pub const fn start_square(self) -> i16 {
        match self {
            Color::Red => 0,
            Color::Blue => 13,
            Color::Green => 26,
            Color::Yellow => 39,
        }
    }

    /// Last ring square this color visits; one step past it leaves the
    /// shared ring and enters the color's home column.
    #[must_use]
    pub const fn entry_square(self) -> i16 {
        match self {
            Color::Red => 51,
            Color::Blue => 12,
            Color::Green => 25,
            Color::Yellow => 38,
        }
    }

    /// Numeric position of the first home-column slot. Each column has
    /// 6 slots; the finish threshold sits one past the last slot.
    #[must_use]
    pub const fn home_column_start(self) -> i16 {
        match self {
            Color::Red => 52,
            Color::Blue => 58,
            Color::Green => 64,
            Color::Yellow => 70,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}

/// Player lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Seated, not currently acting.
    Waiting,
    /// It is this player's turn.
    Active,
    /// All four tokens reached the finish.
    Finished,
}

/// A seated player: a color and exactly four tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub color: Color,
    pub tokens: [Token; 4],
    pub status: PlayerStatus,
}

impl Player {
    /// Create a player with four fresh tokens at home.
    ///
    /// Token IDs are allocated densely: seat index * 4 + slot.
    #[must_use]
    pub fn new(id: PlayerId, color: Color) -> Self {
        let base = id.0 * 4;
        let tokens = std::array::from_fn(|slot| Token::new(TokenId(base + slot as u8), id));
        Self {
            id,
            color,
            tokens,
            status: PlayerStatus::Waiting,
        }
    }

    /// Get a token by ID, if this player owns it.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// Get a mutable token by ID, if this player owns it.
    pub fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.id == id)
    }
}
