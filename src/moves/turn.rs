//! Move and dice-roll shapes.
//!
//! A turn is an ordered list of single-token moves, each pinned to one
//! rolled die by index. Moves never reference the dice sum: `steps` must
//! equal the individual value at `die_index`, which is what lets the
//! validator reject sum-based or index-spoofed submissions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::token::TokenId;

/// A turn spends at most two dice, so move sequences stay inline.
pub type MoveSequence = SmallVec<[TokenMove; 2]>;

/// Rolled die values, one or two depending on dice mode.
pub type DiceValues = SmallVec<[u8; 2]>;

/// One atomic move: one token advancing by one die's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMove {
    /// Token being moved.
    pub token: TokenId,
    /// Steps to advance; must equal the die value at `die_index`.
    pub steps: u8,
    /// Which rolled die this move spends.
    pub die_index: usize,
}

impl TokenMove {
    /// Create a move.
    #[must_use]
    pub const fn new(token: TokenId, steps: u8, die_index: usize) -> Self {
        Self {
            token,
            steps,
            die_index,
        }
    }
}

/// A complete proposed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnMove {
    /// The player submitting the turn.
    pub player: PlayerId,
    /// The dice values this turn claims to spend.
    pub dice_values: DiceValues,
    /// Ordered moves; earlier moves' effects are visible to later ones.
    pub moves: MoveSequence,
}

impl TurnMove {
    /// Create a turn from dice values and moves.
    #[must_use]
    pub fn new(player: PlayerId, dice_values: &[u8], moves: MoveSequence) -> Self {
        Self {
            player,
            dice_values: DiceValues::from_slice(dice_values),
            moves,
        }
    }

    /// A turn that passes without moving (only valid when no die is usable
    /// or full-usage enforcement is off).
    #[must_use]
    pub fn pass(player: PlayerId, dice_values: &[u8]) -> Self {
        Self::new(player, dice_values, MoveSequence::new())
    }
}

/// The result of rolling the dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Individual die values in [1, 6].
    pub values: DiceValues,
    /// Sum of the values. Moves may never spend the sum directly.
    pub total: u8,
    /// Extra-turn flag: a six in single mode, double sixes in double mode.
    pub can_move_again: bool,
    /// Whether any die shows a six (gates leaving home).
    pub has_valid_six: bool,
}

impl DiceRoll {
    /// Build a roll from explicit values.
    ///
    /// This is the injection point for reproducible tests: any sequence of
    /// die values can be turned into a roll without touching the RNG.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        debug_assert!(
            !values.is_empty() && values.len() <= 2,
            "a roll has one or two dice"
        );
        debug_assert!(values.iter().all(|v| (1..=6).contains(v)));

        let total = values.iter().sum();
        let has_valid_six = values.contains(&6);
        // One six grants an extra turn only when it is the whole roll;
        // in double mode both dice must show six.
        let can_move_again = values.iter().all(|&v| v == 6);

        Self {
            values: DiceValues::from_slice(values),
            total,
            can_move_again,
            has_valid_six,
        }
    }
}

/// Outcome of one executed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The opposing token sent home by this move, if any.
    pub captured_token: Option<TokenId>,
}

impl MoveOutcome {
    /// Did this move capture?
    #[must_use]
    pub fn captured(&self) -> bool {
        self.captured_token.is_some()
    }
}

/// Outcome of one executed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// How many moves were applied.
    pub moves_applied: usize,
    /// Every token captured during the turn, in move order.
    pub captured_tokens: SmallVec<[TokenId; 2]>,
}

/// A finished turn as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who took the turn.
    pub player: PlayerId,
    /// The dice values spent.
    pub dice_values: DiceValues,
    /// The moves taken.
    pub moves: MoveSequence,
    /// Tokens captured during the turn.
    pub captures: SmallVec<[TokenId; 2]>,
}
