//! Hitmask crate.
//!
//! Builds a compact per-pixel opacity mask from a source image and answers
//! point hit-test queries against it, so a pointer-event dispatcher can tell
//! whether a point struck a visible pixel of an irregularly shaped image
//! rather than its rectangular bounds.
//!
//! Responsibilities:
//! - threshold an alpha channel into a bit-packed, row-major occupancy map
//! - map query points into the map's pixel space and answer in/out
//! - keep feed/query safe under the single-writer/multi-reader discipline

pub mod coords;
pub mod logging;
pub mod mask;
pub mod source;

mod error;
mod shared;

pub use error::FeedError;
pub use mask::{AlphaMask, BitGrid, MaskPlane};
pub use shared::SharedAlphaMask;
pub use source::{AlphaBuffer, AlphaSource, Rgba8Buffer};
