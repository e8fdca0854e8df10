//! Coordinate types.
//!
//! Query points live in the fed image's local pixel space: top-left origin,
//! x growing right, y growing down, one unit per pixel.

mod vec2;

pub use vec2::Vec2;
