//! Zone-aware position arithmetic.
//!
//! Positions span four zones on one numeric axis (see `core::token`):
//! home yard, shared ring, per-color home column, finished. The functions
//! here map (position, steps, color) to a new position across zone
//! boundaries; they perform no legality checks. Overshooting the finish
//! inside a home column is a legality concern resolved by the rules
//! engine, not here.

use crate::core::config::GameConfig;
use crate::core::player::Color;
use crate::core::token::HOME_POSITION;

/// Number of squares on the shared ring.
pub const RING_SQUARES: i16 = 52;

/// Number of slots in each color's home column.
pub const HOME_COLUMN_SLOTS: i16 = 6;

/// Mid-ring squares where captures are never allowed, for any occupant.
pub const SAFE_SQUARES: [i16; 4] = [8, 21, 34, 47];

/// Compute the position reached by moving `steps` from `position` as `color`.
///
/// - From the home yard the token lands on the color's start square
///   regardless of `steps` (whether leaving home is allowed at all is a
///   rules question).
/// - Inside the color's own home column the position simply advances;
///   overshoot past the finish threshold is not clamped.
/// - On the ring the move wraps modulo 52, unless the path crosses the
///   color's entry square, in which case the token turns into its home
///   column: entry + 1 maps to the first column slot.
///
/// The crossing test uses the raw sum, not the wrapped position, so red's
/// entry at square 51 behaves like every other color's.
#[must_use]
pub fn new_position(position: i16, steps: i16, color: Color) -> i16 {
    if position == HOME_POSITION {
        return color.start_square();
    }

    let column_start = color.home_column_start();
    if position >= column_start {
        return position + steps;
    }

    let entry = color.entry_square();
    let raw = position + steps;
    if position <= entry && raw > entry {
        column_start + (raw - entry - 1)
    } else {
        raw % RING_SQUARES
    }
}

/// Has a token at `position` passed the finish threshold for `color`?
///
/// The threshold is one past the last column slot: a token finishes only by
/// landing exactly on `home_column_start + 6`.
#[must_use]
pub fn has_finished(position: i16, color: Color) -> bool {
    position > color.home_column_start() + HOME_COLUMN_SLOTS - 1
}

/// Is `square` on the shared ring?
#[must_use]
pub fn is_ring_square(position: i16) -> bool {
    (0..RING_SQUARES).contains(&position)
}

/// Is `square` safe for a token of `occupant_color` standing on it?
///
/// The four fixed mid-ring squares protect everyone. A color's own start
/// square protects only when the configuration enables safe starting
/// squares.
#[must_use]
pub fn is_safe_square(square: i16, occupant_color: Color, config: &GameConfig) -> bool {
    if SAFE_SQUARES.contains(&square) {
        return true;
    }
    config.safe_starting_squares && square == occupant_color.start_square()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::FINISHED_POSITION;

    #[test]
    fn test_leaving_home_lands_on_start() {
        assert_eq!(new_position(HOME_POSITION, 6, Color::Red), 0);
        assert_eq!(new_position(HOME_POSITION, 6, Color::Blue), 13);
        assert_eq!(new_position(HOME_POSITION, 6, Color::Green), 26);
        assert_eq!(new_position(HOME_POSITION, 6, Color::Yellow), 39);
    }

    #[test]
    fn test_plain_ring_move() {
        // Red at 45 moving 4 stays on the ring: entry 51 not crossed.
        assert_eq!(new_position(45, 4, Color::Red), 49);
        assert_eq!(new_position(0, 3, Color::Green), 3);
    }

    #[test]
    fn test_ring_wrap_without_crossing() {
        // Blue behind the numeric wrap: 50 + 5 passes squares 51, 0..3 but
        // never blue's entry at 12.
        assert_eq!(new_position(50, 5, Color::Blue), 3);
        assert_eq!(new_position(49, 6, Color::Yellow), 3);
    }

    #[test]
    fn test_column_entry() {
        // Blue at 10 moving 4: crosses entry 12, lands on column slot 1.
        assert_eq!(new_position(10, 4, Color::Blue), 59);
        // Exactly on the entry square, one step turns into the column.
        assert_eq!(new_position(12, 1, Color::Blue), 58);
        // Red crosses entry 51 where the ring also wraps numerically.
        assert_eq!(new_position(48, 6, Color::Red), 54);
        assert_eq!(new_position(51, 1, Color::Red), 52);
    }

    #[test]
    fn test_other_colors_entry_is_ignored() {
        // Green passing blue's entry at 12 stays on the ring.
        assert_eq!(new_position(10, 4, Color::Green), 14);
    }

    #[test]
    fn test_column_advance_no_clamp() {
        assert_eq!(new_position(58, 3, Color::Blue), 61);
        // Overshoot is reported as-is; rejecting it is the rules' job.
        assert_eq!(new_position(62, 6, Color::Blue), 68);
    }

    #[test]
    fn test_has_finished() {
        // Last column slot does not finish; one past it does.
        assert!(!has_finished(57, Color::Red));
        assert!(has_finished(58, Color::Red));
        assert!(!has_finished(63, Color::Blue));
        assert!(has_finished(64, Color::Blue));
        assert!(has_finished(FINISHED_POSITION, Color::Yellow));
        assert!(!has_finished(HOME_POSITION, Color::Red));
        assert!(!has_finished(45, Color::Red));
    }

    #[test]
    fn test_is_ring_square() {
        assert!(is_ring_square(0));
        assert!(is_ring_square(51));
        assert!(!is_ring_square(HOME_POSITION));
        assert!(!is_ring_square(52));
    }

    #[test]
    fn test_fixed_safe_squares() {
        let config = GameConfig::new().with_safe_starting_squares(false);
        for sq in SAFE_SQUARES {
            assert!(is_safe_square(sq, Color::Red, &config));
            assert!(is_safe_square(sq, Color::Blue, &config));
        }
        assert!(!is_safe_square(9, Color::Red, &config));
    }

    #[test]
    fn test_start_square_safety_follows_config() {
        let on = GameConfig::new().with_safe_starting_squares(true);
        let off = GameConfig::new().with_safe_starting_squares(false);

        // Blue on its own start square is protected only when enabled.
        assert!(is_safe_square(13, Color::Blue, &on));
        assert!(!is_safe_square(13, Color::Blue, &off));

        // Another color standing on blue's start square is never protected.
        assert!(!is_safe_square(13, Color::Green, &on));
    }
}
