//! Alpha sample sources.
//!
//! Responsibilities:
//! - define the seam between mask construction and pixel decoding
//! - adapt foreign pixel containers (decoded images, raw byte buffers) into
//!   a single straight-alpha sample per pixel
//!
//! Whatever the underlying format does with premultiplication or byte order
//! is the adapter's problem; the mask builder only ever sees `alpha(x, y)`.

mod buffer;
mod decoded;

pub use buffer::{AlphaBuffer, Rgba8Buffer};

/// A raster an occupancy mask can be built from.
///
/// Implementations report straight (non-premultiplied) alpha in `0..=255`.
/// `alpha` is only called with `x < width()` and `y < height()`.
pub trait AlphaSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Whether the source carries real per-pixel opacity. Sources without
    /// an alpha channel are rejected at feed time rather than treated as
    /// fully opaque.
    fn has_alpha(&self) -> bool;

    /// Alpha sample at pixel `(x, y)`.
    fn alpha(&self, x: u32, y: u32) -> u8;
}
