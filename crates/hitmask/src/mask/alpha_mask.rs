use std::sync::Arc;

use crate::coords::Vec2;
use crate::error::FeedError;
use crate::source::AlphaSource;

use super::MaskPlane;

/// Threshold-holding hit-test mask.
///
/// Construct with an alpha cutoff, feed it an image, then query points.
/// A pixel is solid iff its alpha sample is `>= threshold`; a point hits iff
/// it lands on a solid pixel of the most recently fed image.
///
/// Feeding replaces the published plane wholesale: the new plane is built
/// completely off to the side and only then swapped in, so a failed feed
/// leaves earlier answers intact and `plane()` snapshots stay
/// self-consistent.
#[derive(Debug, Clone)]
pub struct AlphaMask {
    threshold: u8,
    plane: Option<Arc<MaskPlane>>,
}

impl AlphaMask {
    /// A mask with no image loaded yet. Any `0..=255` threshold is valid:
    /// 0 makes every pixel solid, 255 only fully-opaque ones.
    #[inline]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold, plane: None }
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Whether a feed has succeeded since construction.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.plane.is_some()
    }

    /// Snapshot of the currently published plane.
    #[inline]
    pub fn plane(&self) -> Option<Arc<MaskPlane>> {
        self.plane.clone()
    }

    /// Builds a fresh occupancy map from `src` and publishes it, replacing
    /// any previous one.
    ///
    /// On error the previously published plane (and all hit-test answers)
    /// are unchanged.
    pub fn feed(&mut self, src: &impl AlphaSource) -> Result<(), FeedError> {
        let plane = MaskPlane::from_source(src, self.threshold)?;
        log::debug!(
            "mask fed: {}x{}, {} solid pixels (threshold {})",
            plane.width(),
            plane.height(),
            plane.solid_count(),
            self.threshold,
        );
        self.plane = Some(Arc::new(plane));
        Ok(())
    }

    /// Whether `p` lands on a solid pixel of the last fed image.
    ///
    /// Coordinates are floored to the pixel grid (see
    /// [`MaskPlane::hit_test`]). Out-of-bounds points, non-finite points,
    /// and a mask with no image fed yet all answer `false`.
    #[inline]
    pub fn hit_test(&self, p: Vec2) -> bool {
        match self.plane.as_deref() {
            Some(plane) => plane.hit_test(p),
            None => false,
        }
    }
}
