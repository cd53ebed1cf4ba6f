//! The move executor.
//!
//! `execute_move` is the single source of truth for how a move changes a
//! game: validation replays through it on scratch clones and live
//! execution applies it to the real state, so the two can never disagree.
//!
//! The executor performs no legality checks beyond structural lookup.
//! Feeding it an unvalidated move is a caller bug; feeding it a token or
//! player that does not exist is reported as an error before any field is
//! touched.

use crate::board::geometry::{has_finished, is_ring_square, new_position, RING_SQUARES};
use crate::core::config::CaptureMode;
use crate::core::state::GameState;
use crate::core::token::{TokenState, FINISHED_POSITION, HOME_POSITION};
use crate::error::LudoError;

use super::turn::{MoveOutcome, TokenMove};

/// Apply one move to the state, with side effects.
///
/// Order of operations:
/// 1. Resolve the token; unknown IDs fail before any mutation.
/// 2. If the destination is a ring square holding opposing tokens, capture
///    exactly one — the first in occupant order — sending it home.
/// 3. Vacate the mover's old ring square.
/// 4. Move, then resolve the terminal state by priority: capture under
///    capture-mode Finish beats reaching the finish threshold, which beats
///    entering the home column, which beats a plain ring landing.
pub fn execute_move(state: &mut GameState, mv: &TokenMove) -> Result<MoveOutcome, LudoError> {
    let owner = state
        .owner_of(mv.token)
        .ok_or(LudoError::UnknownToken(mv.token))?;
    let color = state
        .player(owner)
        .ok_or(LudoError::UnknownPlayer(owner))?
        .color;
    let old_position = state
        .token(mv.token)
        .ok_or(LudoError::UnknownToken(mv.token))?
        .position;

    let destination = new_position(old_position, i16::from(mv.steps), color);

    // Capture first: one opposing token, first in occupant order.
    let mut captured_token = None;
    if is_ring_square(destination) {
        let victim = state
            .board
            .occupants(destination)
            .iter()
            .copied()
            .find(|&t| state.owner_of(t) != Some(owner));
        if let Some(victim) = victim {
            state.board.remove(destination, victim);
            let token = state
                .token_mut(victim)
                .ok_or(LudoError::UnknownToken(victim))?;
            token.position = HOME_POSITION;
            token.state = TokenState::Home;
            captured_token = Some(victim);
        }
    }

    if is_ring_square(old_position) {
        state.board.remove(old_position, mv.token);
    }

    let finish_by_capture =
        captured_token.is_some() && state.config.capture_mode == CaptureMode::Finish;

    let landed_on_ring = {
        let token = state
            .token_mut(mv.token)
            .ok_or(LudoError::UnknownToken(mv.token))?;

        if finish_by_capture || has_finished(destination, color) {
            token.position = FINISHED_POSITION;
            token.state = TokenState::Finished;
            false
        } else if destination >= RING_SQUARES {
            token.position = destination;
            token.state = TokenState::HomeColumn;
            false
        } else {
            token.position = destination;
            token.state = TokenState::InPlay;
            true
        }
    };

    if landed_on_ring {
        state.board.add(destination, mv.token);
    }

    Ok(MoveOutcome { captured_token })
}
