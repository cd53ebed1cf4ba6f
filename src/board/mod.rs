//! The shared ring: occupancy tracking and position arithmetic.

pub mod geometry;
pub mod track;

pub use geometry::{
    has_finished, is_ring_square, is_safe_square, new_position, HOME_COLUMN_SLOTS, RING_SQUARES,
    SAFE_SQUARES,
};
pub use track::Board;
