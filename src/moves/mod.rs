//! Move shapes and the move executor.

pub mod executor;
pub mod turn;

pub use executor::execute_move;
pub use turn::{
    DiceRoll, DiceValues, MoveOutcome, MoveSequence, TokenMove, TurnMove, TurnOutcome, TurnRecord,
};
