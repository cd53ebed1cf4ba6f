//! Game lifecycle: creation, start, turn rotation, win detection.
//!
//! The status machine is one-way: Waiting -> InProgress -> Finished.

use crate::core::config::GameConfig;
use crate::core::player::{PlayerId, PlayerStatus};
use crate::core::state::{GameId, GameState, GameStatus};
use crate::error::LudoError;
use crate::rules::has_player_won;

/// Create a fresh game in status Waiting.
///
/// Players are seated in the fixed color order with four home tokens each.
#[must_use]
pub fn create_game(id: GameId, config: GameConfig, player_count: usize, seed: u64) -> GameState {
    GameState::new(id, config, player_count, seed)
}

/// Start a waiting game: status becomes InProgress and the first player
/// becomes active. Starting from any other status is an error.
pub fn start_game(state: &mut GameState) -> Result<(), LudoError> {
    if state.status != GameStatus::Waiting {
        return Err(LudoError::InvalidTransition(state.status));
    }
    state.status = GameStatus::InProgress;
    state.current_player_mut().status = PlayerStatus::Active;
    Ok(())
}

/// Advance the turn.
///
/// An extra turn keeps the same player and bumps the consecutive-six
/// counter, but only while the counter stays below the configured cap;
/// once `max_consecutive_sixes` is reached the turn rotates anyway. Any
/// rotation resets the counter and re-activates the next seat.
pub fn next_turn(state: &mut GameState, extra_turn_granted: bool) {
    let cap = state.config.max_consecutive_sixes;
    if extra_turn_granted && state.consecutive_sixes + 1 < cap {
        state.consecutive_sixes += 1;
        return;
    }

    state.consecutive_sixes = 0;

    let current = state.current_player_mut();
    if current.status == PlayerStatus::Active {
        current.status = PlayerStatus::Waiting;
    }

    state.current_player_index = (state.current_player_index + 1) % state.player_count();

    let next = state.current_player_mut();
    if next.status != PlayerStatus::Finished {
        next.status = PlayerStatus::Active;
    }
}

/// Check for a winner: the first player (in seat order) with all four
/// tokens finished ends the game.
///
/// Idempotent once the game is finished.
pub fn check_game_end(state: &mut GameState) -> Option<PlayerId> {
    if state.status == GameStatus::Finished {
        return state.winner;
    }

    let winner = state
        .players()
        .iter()
        .find(|p| has_player_won(p))
        .map(|p| p.id)?;

    if let Some(player) = state.player_mut(winner) {
        player.status = PlayerStatus::Finished;
    }
    state.status = GameStatus::Finished;
    state.winner = Some(winner);
    Some(winner)
}

/// Builder for a configured game.
///
/// ```
/// use ludo_engine::game::GameBuilder;
/// use ludo_engine::core::{CaptureMode, GameStatus};
///
/// let state = GameBuilder::new()
///     .player_count(2)
///     .capture_mode(CaptureMode::Finish)
///     .build(42);
///
/// assert_eq!(state.status, GameStatus::Waiting);
/// assert_eq!(state.player_count(), 2);
/// ```
pub struct GameBuilder {
    id: GameId,
    config: GameConfig,
    player_count: usize,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            id: GameId::new(0),
            config: GameConfig::default(),
            player_count: 4,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=4).contains(&count), "Player count must be 2-4");
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn dice_mode(mut self, mode: crate::core::config::DiceMode) -> Self {
        self.config.dice_mode = mode;
        self
    }

    #[must_use]
    pub fn capture_mode(mut self, mode: crate::core::config::CaptureMode) -> Self {
        self.config.capture_mode = mode;
        self
    }

    #[must_use]
    pub fn token_stacking(mut self, enabled: bool) -> Self {
        self.config.allow_token_stacking = enabled;
        self
    }

    /// Build the game state with the given RNG seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameState {
        create_game(self.id, self.config, self.player_count, seed)
    }
}
