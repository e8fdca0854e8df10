//! Occupancy mask types.
//!
//! Responsibilities:
//! - pack per-pixel solid/transparent decisions into a row-major bit buffer
//! - bundle the buffer with the dimensions it was built under, immutably
//! - expose the threshold-holding mask with its feed/hit-test surface

mod alpha_mask;
mod bits;
mod plane;

pub use alpha_mask::AlphaMask;
pub use bits::BitGrid;
pub use plane::MaskPlane;
