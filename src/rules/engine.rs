//! Single-move legality and the win predicate.
//!
//! `is_valid_move` is a pure predicate: it never mutates state and reports
//! illegality as `false`, never as an error. It checks one move against
//! one roll; whole-turn concerns (die bookkeeping, ordering, full-usage
//! enforcement) live in `rules::combinations`.

use crate::board::geometry::{is_ring_square, is_safe_square, new_position, HOME_COLUMN_SLOTS};
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::core::token::TokenState;
use crate::moves::{DiceRoll, TokenMove};

/// Can this move legally be made right now, given this roll?
///
/// Rules, in check order:
/// - the token must exist and `steps` must equal one of the rolled values
///   (the sum of two dice is never a legal step count);
/// - a home token moves only on a six, and not onto a start square already
///   holding an own token while stacking is disabled;
/// - a finished token never moves;
/// - a home-column token may not overshoot the finish threshold;
/// - a ring destination may not hold an own token (unless stacking) or an
///   opponent protected by a safe square.
#[must_use]
pub fn is_valid_move(state: &GameState, mv: &TokenMove, roll: &DiceRoll) -> bool {
    let Some(owner) = state.owner_of(mv.token) else {
        return false;
    };
    let Some(player) = state.player(owner) else {
        return false;
    };
    if !roll.values.contains(&mv.steps) {
        return false;
    }

    let color = player.color;
    let token = match player.token(mv.token) {
        Some(t) => t,
        None => return false,
    };

    match token.state {
        TokenState::Finished => return false,
        TokenState::Home => {
            if mv.steps != 6 || !roll.has_valid_six {
                return false;
            }
        }
        TokenState::HomeColumn => {
            let finish = color.home_column_start() + HOME_COLUMN_SLOTS;
            return token.position + i16::from(mv.steps) <= finish;
        }
        TokenState::InPlay => {}
    }

    let destination = new_position(token.position, i16::from(mv.steps), color);
    if !is_ring_square(destination) {
        // Entered the own home column from the ring; a single die can land
        // at most on the last column slot, so no overshoot is possible.
        return true;
    }

    for &occupant in state.board.occupants(destination) {
        let Some(occupant_owner) = state.owner_of(occupant) else {
            return false;
        };
        if occupant_owner == owner {
            if !state.config.allow_token_stacking {
                return false;
            }
        } else {
            let Some(occupant_color) = state.player(occupant_owner).map(|p| p.color) else {
                return false;
            };
            if is_safe_square(destination, occupant_color, &state.config) {
                return false;
            }
        }
    }

    true
}

/// Has this player brought all four tokens home?
#[must_use]
pub fn has_player_won(player: &Player) -> bool {
    player.tokens.iter().all(|t| t.state == TokenState::Finished)
}
