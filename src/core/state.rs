//! Live game state.
//!
//! ## GameState
//!
//! One value owns everything about a running game:
//! - Rule configuration and seated players (each with its four tokens)
//! - Ring occupancy (`Board`)
//! - Turn bookkeeping: current player index, consecutive-six counter
//! - Lifecycle status and winner
//! - Turn history and the deterministic dice RNG
//!
//! The state is mutated in place by the move executor and the game
//! manager. Speculative work (move enumeration, turn validation) runs on
//! `simulation_clone()` copies so the live state is never touched by a
//! rejected hypothesis.

use im::Vector;
use rustc_hash::FxHashMap;

use super::config::GameConfig;
use super::player::{Color, Player, PlayerId};
use super::rng::DiceRng;
use super::token::{Token, TokenId};
use crate::board::Board;
use crate::moves::TurnRecord;

/// Game identifier, assigned by the caller at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Game lifecycle. Transitions are one-way:
/// Waiting -> InProgress -> Finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    Waiting,
    InProgress,
    Finished,
}

/// Complete state of one game.
pub struct GameState {
    pub id: GameId,
    pub config: GameConfig,
    pub current_player_index: usize,
    pub board: Board,
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    /// Sixes exploited in a row by the current player.
    pub consecutive_sixes: u8,
    /// Executed turns, oldest first.
    pub history: Vector<TurnRecord>,
    /// Deterministic dice source.
    pub rng: DiceRng,

    /// Seated players in turn order.
    players: Vec<Player>,
    /// Token ownership index, built once at creation.
    token_owners: FxHashMap<TokenId, PlayerId>,
}

impl GameState {
    /// Create a fresh game: `player_count` players seated in the fixed
    /// color order, four home tokens each, empty board, status Waiting.
    #[must_use]
    pub fn new(id: GameId, config: GameConfig, player_count: usize, seed: u64) -> Self {
        assert!(
            (2..=4).contains(&player_count),
            "Player count must be 2-4"
        );

        let players: Vec<Player> = (0..player_count)
            .map(|i| Player::new(PlayerId::new(i as u8), Color::ALL[i]))
            .collect();

        let mut token_owners = FxHashMap::default();
        for player in &players {
            for token in &player.tokens {
                token_owners.insert(token.id, player.id);
            }
        }

        Self {
            id,
            config,
            current_player_index: 0,
            board: Board::new(),
            status: GameStatus::Waiting,
            winner: None,
            consecutive_sixes: 0,
            history: Vector::new(),
            rng: DiceRng::new(seed),
            players,
            token_owners,
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Get a mutable player by ID.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// The mutable player whose turn it is.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    /// Who owns a token, if it exists in this game.
    #[must_use]
    pub fn owner_of(&self, token: TokenId) -> Option<PlayerId> {
        self.token_owners.get(&token).copied()
    }

    /// Look up a token anywhere in the game.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        let owner = self.owner_of(id)?;
        self.players[owner.index()].token(id)
    }

    /// Look up a mutable token anywhere in the game.
    pub fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        let owner = self.owner_of(id)?;
        self.players[owner.index()].token_mut(id)
    }

    /// Append an executed turn to the history.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    /// Deep value copy for speculative simulation.
    ///
    /// The clone carries a context-derived RNG stream so taking it never
    /// advances the live game's dice, and simulated branches stay
    /// deterministic.
    #[must_use]
    pub fn simulation_clone(&self) -> Self {
        Self {
            id: self.id,
            config: self.config,
            current_player_index: self.current_player_index,
            board: self.board.clone(),
            status: self.status,
            winner: self.winner,
            consecutive_sixes: self.consecutive_sixes,
            history: self.history.clone(),
            rng: self.rng.for_context("simulation"),
            players: self.players.clone(),
            token_owners: self.token_owners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerStatus;
    use crate::core::token::TokenState;

    fn fresh_state() -> GameState {
        GameState::new(GameId::new(1), GameConfig::default(), 4, 42)
    }

    #[test]
    fn test_new_game_state() {
        let state = fresh_state();

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.status, GameStatus::Waiting);
        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.consecutive_sixes, 0);
        assert_eq!(state.winner, None);
        assert_eq!(state.board.total_tokens(), 0);
        assert!(state.history.is_empty());

        for player in state.players() {
            assert_eq!(player.status, PlayerStatus::Waiting);
            for token in &player.tokens {
                assert_eq!(token.state, TokenState::Home);
            }
        }
    }

    #[test]
    fn test_color_assignment_follows_seat_order() {
        let state = GameState::new(GameId::new(2), GameConfig::default(), 3, 0);

        assert_eq!(state.players()[0].color, Color::Red);
        assert_eq!(state.players()[1].color, Color::Blue);
        assert_eq!(state.players()[2].color, Color::Green);
    }

    #[test]
    fn test_token_lookup() {
        let state = fresh_state();

        // 4 players x 4 tokens, densely numbered.
        for id in 0..16 {
            let token = state.token(TokenId(id)).unwrap();
            assert_eq!(token.owner, PlayerId::new(id / 4));
            assert_eq!(state.owner_of(TokenId(id)), Some(PlayerId::new(id / 4)));
        }
        assert!(state.token(TokenId(16)).is_none());
        assert_eq!(state.owner_of(TokenId(99)), None);
    }

    #[test]
    fn test_token_mut() {
        let mut state = fresh_state();

        let token = state.token_mut(TokenId(5)).unwrap();
        token.position = 20;
        token.state = TokenState::InPlay;

        assert_eq!(state.token(TokenId(5)).unwrap().position, 20);
    }

    #[test]
    fn test_simulation_clone_is_independent() {
        let mut state = fresh_state();
        let mut clone = state.simulation_clone();

        clone.token_mut(TokenId(0)).unwrap().position = 10;
        clone.board.add(10, TokenId(0));

        assert_eq!(state.token(TokenId(0)).unwrap().position, -1);
        assert_eq!(state.board.total_tokens(), 0);

        // Cloning must not advance the live dice stream.
        let mut reference = GameState::new(GameId::new(1), GameConfig::default(), 4, 42);
        assert_eq!(state.rng.roll_die(), reference.rng.roll_die());
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_too_few_players_panics() {
        let _ = GameState::new(GameId::new(0), GameConfig::default(), 1, 0);
    }

    #[test]
    fn test_record_turn() {
        let mut state = fresh_state();

        state.record_turn(TurnRecord {
            player: PlayerId::new(0),
            dice_values: smallvec::smallvec![6],
            moves: smallvec::smallvec![],
            captures: smallvec::smallvec![],
        });

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].player, PlayerId::new(0));
    }
}
