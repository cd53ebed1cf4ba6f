//! Dice-usage enumeration and whole-turn validation.
//!
//! A roll of one or two dice can be spent in several orders on several
//! tokens, and later moves see earlier moves' effects, so legality of a
//! whole turn cannot be judged move-by-move against the starting state.
//! Enumeration and validation both replay candidate moves through the move
//! executor on deep clones; the live state is never touched.

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::token::TokenId;
use crate::error::LudoError;
use crate::moves::executor::execute_move;
use crate::moves::{DiceRoll, MoveSequence, TokenMove, TurnMove};

use super::engine::is_valid_move;

/// Enumerate every legal way to spend the rolled dice, in die order.
///
/// Backtracking over die indices left-to-right: at each index every token
/// of the player is tried; each legal move is applied to a fresh clone
/// before recursing, so sibling branches cannot see each other's effects.
/// A die that no token can use is skipped — that is the only way a die
/// goes unspent. Branching is at most 4 tokens per die and depth at most
/// 2 dice, so the search is small and bounded.
///
/// Returned sequences are non-empty; an unknown player yields nothing.
#[must_use]
pub fn all_move_combinations(
    state: &GameState,
    player: PlayerId,
    dice_values: &[u8],
) -> Vec<MoveSequence> {
    let Some(seat) = state.player(player) else {
        return Vec::new();
    };
    let tokens: Vec<TokenId> = seat.tokens.iter().map(|t| t.id).collect();

    let roll = DiceRoll::from_values(dice_values);
    let mut sequences = Vec::new();
    let mut current = MoveSequence::new();

    search(
        state,
        &tokens,
        dice_values,
        &roll,
        0,
        &mut current,
        &mut sequences,
    );
    sequences
}

fn search(
    state: &GameState,
    tokens: &[TokenId],
    dice_values: &[u8],
    roll: &DiceRoll,
    die_index: usize,
    current: &mut MoveSequence,
    out: &mut Vec<MoveSequence>,
) {
    if die_index == dice_values.len() {
        if !current.is_empty() {
            out.push(current.clone());
        }
        return;
    }

    let steps = dice_values[die_index];
    let mut die_usable = false;

    for &token in tokens {
        let mv = TokenMove::new(token, steps, die_index);
        if !is_valid_move(state, &mv, roll) {
            continue;
        }
        die_usable = true;

        let mut branch = state.simulation_clone();
        execute_move(&mut branch, &mv).expect("legal move must execute");

        current.push(mv);
        search(&branch, tokens, dice_values, roll, die_index + 1, current, out);
        current.pop();
    }

    if !die_usable {
        search(state, tokens, dice_values, roll, die_index + 1, current, out);
    }
}

/// Authoritative whole-turn check. Never mutates the live state.
///
/// A submission is valid when:
/// 1. its player exists, and an empty move list is only offered when
///    full-usage enforcement is off or no die has any legal use;
/// 2. die indices are in range and spent at most once, and — under
///    full-usage enforcement — no enumerable combination spends strictly
///    more dice than the submission does (a usable die may not be ignored
///    because using it is unfavorable);
/// 3. replaying the moves in order on a scratch clone succeeds: each
///    entry's steps equal the die value at its index, each token belongs
///    to the submitting player, and each move passes `is_valid_move`
///    against the then-current scratch state before being applied through
///    the executor.
#[must_use]
pub fn validate_turn_move(state: &GameState, turn: &TurnMove) -> bool {
    if state.player(turn.player).is_none() {
        return false;
    }
    let dice_values = &turn.dice_values;
    if dice_values.is_empty() {
        return false;
    }

    if turn.moves.is_empty() {
        return !state.config.enforce_full_dice_usage
            || all_move_combinations(state, turn.player, dice_values).is_empty();
    }

    let mut spent = vec![false; dice_values.len()];
    for mv in &turn.moves {
        match spent.get_mut(mv.die_index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }

    if state.config.enforce_full_dice_usage && turn.moves.len() < dice_values.len() {
        let combinations = all_move_combinations(state, turn.player, dice_values);
        if combinations.iter().any(|c| c.len() > turn.moves.len()) {
            return false;
        }
    }

    let roll = DiceRoll::from_values(dice_values);
    let mut scratch = state.simulation_clone();

    for mv in &turn.moves {
        if mv.steps != dice_values[mv.die_index] {
            return false;
        }
        if scratch.owner_of(mv.token) != Some(turn.player) {
            return false;
        }
        if !is_valid_move(&scratch, mv, &roll) {
            return false;
        }
        if execute_move(&mut scratch, mv).is_err() {
            return false;
        }
    }

    true
}

/// Enumerate combinations and keep only whole-turn-legal submissions.
#[must_use]
pub fn valid_turn_moves(
    state: &GameState,
    player: PlayerId,
    dice_values: &[u8],
) -> Vec<TurnMove> {
    all_move_combinations(state, player, dice_values)
        .into_iter()
        .map(|moves| TurnMove::new(player, dice_values, moves))
        .filter(|turn| validate_turn_move(state, turn))
        .collect()
}

/// Replay a turn on a clone and report whether every step succeeded.
///
/// Exists for parity checking in tests and diagnostics; `validate_turn_move`
/// is the production entry point.
pub fn replay_on_clone(state: &GameState, turn: &TurnMove) -> Result<GameState, LudoError> {
    let mut scratch = state.simulation_clone();
    for mv in &turn.moves {
        execute_move(&mut scratch, mv)?;
    }
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::state::GameId;
    use crate::core::token::TokenState;
    use smallvec::smallvec;

    fn state_with(config: GameConfig) -> GameState {
        GameState::new(GameId::new(0), config, 4, 42)
    }

    fn place(state: &mut GameState, token: TokenId, square: i16) {
        let t = state.token_mut(token).unwrap();
        t.position = square;
        t.state = TokenState::InPlay;
        state.board.add(square, token);
    }

    fn finish_all_but(state: &mut GameState, player: PlayerId, keep: TokenId) {
        let ids: Vec<TokenId> = state.player(player).unwrap().tokens.iter().map(|t| t.id).collect();
        for id in ids {
            if id != keep {
                let t = state.token_mut(id).unwrap();
                t.position = crate::core::token::FINISHED_POSITION;
                t.state = TokenState::Finished;
            }
        }
    }

    #[test]
    fn test_no_moves_when_everyone_home_without_six() {
        let state = state_with(GameConfig::default());
        let combos = all_move_combinations(&state, PlayerId::new(0), &[3]);
        assert!(combos.is_empty());
    }

    #[test]
    fn test_six_opens_home_exits() {
        let state = state_with(GameConfig::default());
        let combos = all_move_combinations(&state, PlayerId::new(0), &[6]);

        // All four home tokens can come out.
        assert_eq!(combos.len(), 4);
        for combo in &combos {
            assert_eq!(combo.len(), 1);
            assert_eq!(combo[0].steps, 6);
            assert_eq!(combo[0].die_index, 0);
        }
    }

    #[test]
    fn test_two_dice_sequences_thread_state() {
        let mut state = state_with(GameConfig::default());
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        place(&mut state, TokenId(0), 20);

        let combos = all_move_combinations(&state, PlayerId::new(0), &[5, 4]);

        // One token, both dice: 20 -> 25 -> 29.
        assert_eq!(combos.len(), 1);
        let combo = &combos[0];
        assert_eq!(combo.len(), 2);
        assert_eq!((combo[0].die_index, combo[0].steps), (0, 5));
        assert_eq!((combo[1].die_index, combo[1].steps), (1, 4));
    }

    #[test]
    fn test_unusable_die_is_skipped() {
        let mut state = state_with(GameConfig::default());
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        // Red in its column, 3 from the finish: die 3 fits, die 5 overshoots.
        let t = state.token_mut(TokenId(0)).unwrap();
        t.position = 55;
        t.state = TokenState::HomeColumn;

        let combos = all_move_combinations(&state, PlayerId::new(0), &[5, 3]);

        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].len(), 1);
        assert_eq!((combos[0][0].die_index, combos[0][0].steps), (1, 3));
    }

    #[test]
    fn test_empty_turn_valid_only_when_nothing_usable() {
        let state = state_with(GameConfig::default());

        // Nothing can use a 3 from home.
        assert!(validate_turn_move(&state, &TurnMove::pass(PlayerId::new(0), &[3])));
        // A six is usable, so passing is cherry-picking.
        assert!(!validate_turn_move(&state, &TurnMove::pass(PlayerId::new(0), &[6])));

        // With enforcement off, passing is always allowed.
        let lax = state_with(GameConfig::new().with_full_dice_usage(false));
        assert!(validate_turn_move(&lax, &TurnMove::pass(PlayerId::new(0), &[6])));
    }

    #[test]
    fn test_partial_usage_rejected_when_full_usage_exists() {
        let mut state = state_with(GameConfig::default());
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        place(&mut state, TokenId(0), 20);

        // Both dice are usable back-to-back; spending only one is rejected.
        let partial = TurnMove::new(
            PlayerId::new(0),
            &[5, 4],
            smallvec![TokenMove::new(TokenId(0), 5, 0)],
        );
        assert!(!validate_turn_move(&state, &partial));

        let full = TurnMove::new(
            PlayerId::new(0),
            &[5, 4],
            smallvec![
                TokenMove::new(TokenId(0), 5, 0),
                TokenMove::new(TokenId(0), 4, 1)
            ],
        );
        assert!(validate_turn_move(&state, &full));

        // Without enforcement the partial turn stands.
        let mut lax = state_with(GameConfig::new().with_full_dice_usage(false));
        finish_all_but(&mut lax, PlayerId::new(0), TokenId(0));
        place(&mut lax, TokenId(0), 20);
        assert!(validate_turn_move(&lax, &partial));
    }

    #[test]
    fn test_sum_move_rejected() {
        let mut state = state_with(GameConfig::default());
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        place(&mut state, TokenId(0), 20);

        // steps = 5 + 4 pinned to either die index is a spoof.
        for die_index in 0..2 {
            let cheat = TurnMove::new(
                PlayerId::new(0),
                &[5, 4],
                smallvec![TokenMove::new(TokenId(0), 9, die_index)],
            );
            assert!(!validate_turn_move(&state, &cheat));
        }
    }

    #[test]
    fn test_die_index_spoofing_rejected() {
        let mut state = state_with(GameConfig::default());
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        place(&mut state, TokenId(0), 20);

        // Claiming die 0 rolled a 4 when it rolled a 5.
        let spoof = TurnMove::new(
            PlayerId::new(0),
            &[5, 4],
            smallvec![
                TokenMove::new(TokenId(0), 4, 0),
                TokenMove::new(TokenId(0), 5, 1)
            ],
        );
        assert!(!validate_turn_move(&state, &spoof));

        // Spending the same die twice.
        let double_spend = TurnMove::new(
            PlayerId::new(0),
            &[5, 4],
            smallvec![
                TokenMove::new(TokenId(0), 5, 0),
                TokenMove::new(TokenId(0), 5, 0)
            ],
        );
        assert!(!validate_turn_move(&state, &double_spend));

        let out_of_range = TurnMove::new(
            PlayerId::new(0),
            &[5],
            smallvec![TokenMove::new(TokenId(0), 5, 1)],
        );
        assert!(!validate_turn_move(&state, &out_of_range));
    }

    #[test]
    fn test_foreign_token_rejected() {
        let mut state = state_with(GameConfig::default());
        place(&mut state, TokenId(4), 20); // blue's token

        let turn = TurnMove::new(
            PlayerId::new(0),
            &[3],
            smallvec![TokenMove::new(TokenId(4), 3, 0)],
        );
        assert!(!validate_turn_move(&state, &turn));
    }

    #[test]
    fn test_later_moves_see_earlier_effects() {
        // Capture-mode Finish: the capture spends die 4 and finishes the
        // mover, so die 5 has no further use on that token.
        let config = GameConfig::new().with_capture_mode(crate::core::config::CaptureMode::Finish);
        let mut state = state_with(config);
        finish_all_but(&mut state, PlayerId::new(0), TokenId(0));
        place(&mut state, TokenId(0), 45); // red
        place(&mut state, TokenId(4), 49); // blue victim at 45 + 4

        let greedy = TurnMove::new(
            PlayerId::new(0),
            &[5, 4],
            smallvec![
                TokenMove::new(TokenId(0), 4, 1),
                TokenMove::new(TokenId(0), 5, 0)
            ],
        );
        assert!(!validate_turn_move(&state, &greedy));
    }

    #[test]
    fn test_valid_turn_moves_are_all_validated() {
        let mut state = state_with(GameConfig::default());
        place(&mut state, TokenId(0), 10);
        place(&mut state, TokenId(1), 30);

        let turns = valid_turn_moves(&state, PlayerId::new(0), &[6, 2]);
        assert!(!turns.is_empty());
        for turn in &turns {
            assert!(validate_turn_move(&state, turn));
            assert_eq!(turn.player, PlayerId::new(0));
        }
    }

    #[test]
    fn test_validation_does_not_mutate_live_state() {
        let mut state = state_with(GameConfig::default());
        place(&mut state, TokenId(0), 20);

        let turn = TurnMove::new(
            PlayerId::new(0),
            &[5],
            smallvec![TokenMove::new(TokenId(0), 5, 0)],
        );
        assert!(validate_turn_move(&state, &turn));

        assert_eq!(state.token(TokenId(0)).unwrap().position, 20);
        assert_eq!(state.board.occupants(20), &[TokenId(0)]);
        assert!(state.board.occupants(25).is_empty());
    }

    #[test]
    fn test_unknown_player_rejected() {
        let state = state_with(GameConfig::default());
        let turn = TurnMove::pass(PlayerId::new(9), &[3]);
        assert!(!validate_turn_move(&state, &turn));
        assert!(all_move_combinations(&state, PlayerId::new(9), &[3]).is_empty());
    }
}
