//! Ring occupancy tracking.
//!
//! Each of the 52 ring squares holds an ordered dynamic set of token IDs
//! rather than a single optional slot, because stacking can co-locate
//! several same-color tokens. Occupant order is insertion order; capture
//! tie-breaks pick the first occupant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::RING_SQUARES;
use crate::core::token::TokenId;

/// The shared 52-square ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<SmallVec<[TokenId; 4]>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squares: vec![SmallVec::new(); RING_SQUARES as usize],
        }
    }

    /// Tokens standing on `square`, in insertion order.
    #[must_use]
    pub fn occupants(&self, square: i16) -> &[TokenId] {
        &self.squares[Self::index(square)]
    }

    /// Put a token on a square.
    ///
    /// Panics if the token is already there; the executor owns the
    /// position/occupancy invariant and a double add means it broke.
    pub fn add(&mut self, square: i16, token: TokenId) {
        let slot = &mut self.squares[Self::index(square)];
        if slot.contains(&token) {
            panic!("{} already occupies square {}", token, square);
        }
        slot.push(token);
    }

    /// Take a token off a square. Returns true if it was there.
    pub fn remove(&mut self, square: i16, token: TokenId) -> bool {
        let slot = &mut self.squares[Self::index(square)];
        let before = slot.len();
        slot.retain(|&mut t| t != token);
        slot.len() != before
    }

    /// Is the token standing on the square?
    #[must_use]
    pub fn contains(&self, square: i16, token: TokenId) -> bool {
        self.occupants(square).contains(&token)
    }

    /// Iterate over non-empty squares and their occupants.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (i16, &[TokenId])> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, s)| (i as i16, s.as_slice()))
    }

    /// Total tokens on the ring.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.squares.iter().map(SmallVec::len).sum()
    }

    fn index(square: i16) -> usize {
        assert!(
            (0..RING_SQUARES).contains(&square),
            "square {} outside the ring",
            square
        );
        square as usize
    }
}
