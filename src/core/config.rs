//! Game configuration.
//!
//! A `GameConfig` is provided at game creation and read-only afterwards.
//! The engine does not validate configurations beyond reading the declared
//! fields; nonsensical combinations are the caller's responsibility.

use serde::{Deserialize, Serialize};

/// How many dice a turn rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceMode {
    /// One die per roll.
    Single,
    /// Two independent dice per roll.
    Double,
}

/// What happens to a token that captures an opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureMode {
    /// The capturing token stays on the square it landed on.
    Stay,
    /// The capturing token is sent straight to the finish.
    Finish,
}

/// Complete rule configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dice_mode: DiceMode,
    pub capture_mode: CaptureMode,

    /// How many sixes in a row one player may exploit before the turn is
    /// forced to rotate. 3 allows at most 2 extra turns.
    pub max_consecutive_sixes: u8,

    /// When set, a token on its own color's start square cannot be captured.
    pub safe_starting_squares: bool,

    /// When set, a player may stack several own tokens on one ring square.
    pub allow_token_stacking: bool,

    /// When set, a turn must spend every rolled die that has any legal use.
    pub enforce_full_dice_usage: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_mode: DiceMode::Single,
            capture_mode: CaptureMode::Stay,
            max_consecutive_sixes: 3,
            safe_starting_squares: true,
            allow_token_stacking: false,
            enforce_full_dice_usage: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice mode.
    #[must_use]
    pub fn with_dice_mode(mut self, mode: DiceMode) -> Self {
        self.dice_mode = mode;
        self
    }

    /// Set the capture mode.
    #[must_use]
    pub fn with_capture_mode(mut self, mode: CaptureMode) -> Self {
        self.capture_mode = mode;
        self
    }

    /// Set the consecutive-six cap.
    #[must_use]
    pub fn with_max_consecutive_sixes(mut self, max: u8) -> Self {
        self.max_consecutive_sixes = max;
        self
    }

    /// Enable or disable start-square safety.
    #[must_use]
    pub fn with_safe_starting_squares(mut self, enabled: bool) -> Self {
        self.safe_starting_squares = enabled;
        self
    }

    /// Enable or disable same-color token stacking.
    #[must_use]
    pub fn with_token_stacking(mut self, enabled: bool) -> Self {
        self.allow_token_stacking = enabled;
        self
    }

    /// Enable or disable the full-dice-usage requirement.
    #[must_use]
    pub fn with_full_dice_usage(mut self, enabled: bool) -> Self {
        self.enforce_full_dice_usage = enabled;
        self
    }

    /// Number of dice rolled per turn under this configuration.
    #[must_use]
    pub fn dice_per_roll(&self) -> usize {
        match self.dice_mode {
            DiceMode::Single => 1,
            DiceMode::Double => 2,
        }
    }
}
