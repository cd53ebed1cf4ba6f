//! Turn orchestration: roll dice, execute a validated turn, list options.
//!
//! The split between validation and execution is deliberate:
//! `execute_turn_move` re-checks nothing, so a caller can validate several
//! candidate turns against clones and then commit exactly one to the live
//! state knowing it will apply identically.

use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::LudoError;
use crate::moves::executor::execute_move;
use crate::moves::{DiceRoll, DiceValues, TurnMove, TurnOutcome, TurnRecord};
use crate::rules;

/// Roll the dice for the current configuration.
///
/// Draws one or two independent uniform values from the game's
/// deterministic RNG. The extra-turn flag follows the dice mode: a lone
/// six in single mode, both sixes in double mode.
pub fn roll_dice(state: &mut GameState) -> DiceRoll {
    let mut values = DiceValues::new();
    for _ in 0..state.config.dice_per_roll() {
        values.push(state.rng.roll_die());
    }
    DiceRoll::from_values(&values)
}

/// Apply a whole turn to the live state.
///
/// Performs no legality re-check — run `rules::validate_turn_move` first.
/// Moves are applied in order through the move executor; captures are
/// accumulated and the turn is appended to the game history.
pub fn execute_turn_move(
    state: &mut GameState,
    turn: &TurnMove,
) -> Result<TurnOutcome, LudoError> {
    if state.player(turn.player).is_none() {
        return Err(LudoError::UnknownPlayer(turn.player));
    }

    let mut captured_tokens: SmallVec<[crate::core::token::TokenId; 2]> = SmallVec::new();
    let mut moves_applied = 0;

    for mv in &turn.moves {
        let outcome = execute_move(state, mv)?;
        if let Some(victim) = outcome.captured_token {
            captured_tokens.push(victim);
        }
        moves_applied += 1;
    }

    state.record_turn(TurnRecord {
        player: turn.player,
        dice_values: turn.dice_values.clone(),
        moves: turn.moves.clone(),
        captures: captured_tokens.clone(),
    });

    Ok(TurnOutcome {
        moves_applied,
        captured_tokens,
    })
}

/// Every whole-turn-legal way for `player` to spend `dice_values`.
///
/// Convenience query for a UI or bot: enumerates combinations and filters
/// them through full validation, so everything returned can be passed to
/// `execute_turn_move` as-is.
#[must_use]
pub fn valid_turn_moves(
    state: &GameState,
    player: PlayerId,
    dice_values: &[u8],
) -> Vec<TurnMove> {
    rules::valid_turn_moves(state, player, dice_values)
}
