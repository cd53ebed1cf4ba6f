//! Loss-free game snapshots.
//!
//! The core keeps no storage of its own, but the session layer around it
//! routes games between players and across restarts. `GameSnapshot` is the
//! hand-off shape: every plain field of the game plus the RNG stream
//! position, so a restored game continues with the exact dice the original
//! would have rolled. Encoded with bincode; the core defines no richer
//! wire format.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::{DiceRng, DiceRngState};
use crate::core::state::{GameId, GameState, GameStatus};
use crate::moves::TurnRecord;
use crate::error::LudoError;

/// A serializable capture of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub board: Board,
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    pub consecutive_sixes: u8,
    pub history: Vector<TurnRecord>,
    pub rng: DiceRngState,
}

impl GameSnapshot {
    /// Capture a live game.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            id: state.id,
            config: state.config,
            players: state.players().to_vec(),
            current_player_index: state.current_player_index,
            board: state.board.clone(),
            status: state.status,
            winner: state.winner,
            consecutive_sixes: state.consecutive_sixes,
            history: state.history.clone(),
            rng: state.rng.state(),
        }
    }

    /// Rebuild a live game. The token ownership index is derived from the
    /// players, and the RNG resumes mid-stream.
    #[must_use]
    pub fn restore(&self) -> GameState {
        let mut state = GameState::new(
            self.id,
            self.config,
            self.players.len(),
            0, // seed replaced below by the captured stream
        );
        state.current_player_index = self.current_player_index;
        state.board = self.board.clone();
        state.status = self.status;
        state.winner = self.winner;
        state.consecutive_sixes = self.consecutive_sixes;
        state.history = self.history.clone();
        state.rng = DiceRng::from_state(&self.rng);
        for player in &self.players {
            *state
                .player_mut(player.id)
                .expect("snapshot seats match player count") = player.clone();
        }
        state
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LudoError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LudoError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
