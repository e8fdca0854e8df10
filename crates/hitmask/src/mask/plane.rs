use crate::coords::Vec2;
use crate::error::FeedError;
use crate::source::AlphaSource;

use super::BitGrid;

/// One fully built occupancy map: dimensions plus the packed bits.
///
/// A plane is immutable once built. Re-feeding a mask builds a new plane and
/// publishes it wholesale, so readers holding an older plane keep a
/// self-consistent width/height/bits triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPlane {
    width: u32,
    height: u32,
    bits: BitGrid,
}

impl MaskPlane {
    /// Thresholds every alpha sample of `src` into a fresh plane.
    ///
    /// Pixels are visited in row-major order; bit `y * width + x` is set iff
    /// `src.alpha(x, y) >= threshold`.
    pub fn from_source(src: &impl AlphaSource, threshold: u8) -> Result<Self, FeedError> {
        let (width, height) = (src.width(), src.height());
        if width == 0 || height == 0 {
            return Err(FeedError::EmptyImage { width, height });
        }
        if !src.has_alpha() {
            return Err(FeedError::OpaqueSource);
        }

        let mut bits = BitGrid::new(width as usize * height as usize);
        for y in 0..height {
            let row = y as usize * width as usize;
            for x in 0..width {
                if src.alpha(x, y) >= threshold {
                    bits.set(row + x as usize);
                }
            }
        }

        Ok(Self { width, height, bits })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel `(x, y)` was at or above the threshold.
    /// Out-of-bounds pixels are never solid.
    #[inline]
    pub fn solid(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits.get(y as usize * self.width as usize + x as usize)
    }

    /// Number of solid pixels. Diagnostic; not on any hot path.
    pub fn solid_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Point query with floor-to-int conversion.
    ///
    /// The point is snapped to the pixel grid with `floor` (top-left
    /// origin), then bounds-checked half-open against
    /// `[0, width) x [0, height)`. Non-finite and out-of-bounds points miss.
    pub fn hit_test(&self, p: Vec2) -> bool {
        if !p.is_finite() {
            return false;
        }
        let p = p.floor();
        if p.x < 0.0 || p.y < 0.0 || p.x >= self.width as f32 || p.y >= self.height as f32 {
            return false;
        }
        self.solid(p.x as u32, p.y as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AlphaBuffer;

    fn plane(width: u32, height: u32, samples: &[u8], threshold: u8) -> MaskPlane {
        let src = AlphaBuffer::new(width, height, samples).unwrap();
        MaskPlane::from_source(&src, threshold).unwrap()
    }

    // ── from_source ───────────────────────────────────────────────────────

    #[test]
    fn thresholds_row_major() {
        let p = plane(2, 2, &[255, 0, 130, 127], 128);
        assert!(p.solid(0, 0));
        assert!(!p.solid(1, 0));
        assert!(p.solid(0, 1));
        assert!(!p.solid(1, 1));
        assert_eq!(p.solid_count(), 2);
    }

    #[test]
    fn threshold_zero_makes_everything_solid() {
        let p = plane(2, 1, &[0, 255], 0);
        assert!(p.solid(0, 0));
        assert!(p.solid(1, 0));
    }

    #[test]
    fn threshold_255_requires_full_opacity() {
        let p = plane(2, 1, &[254, 255], 255);
        assert!(!p.solid(0, 0));
        assert!(p.solid(1, 0));
    }

    #[test]
    fn zero_width_is_rejected() {
        let src = AlphaBuffer::new(0, 4, &[]).unwrap();
        assert_eq!(
            MaskPlane::from_source(&src, 128),
            Err(FeedError::EmptyImage { width: 0, height: 4 })
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        let src = AlphaBuffer::new(4, 0, &[]).unwrap();
        assert_eq!(
            MaskPlane::from_source(&src, 128),
            Err(FeedError::EmptyImage { width: 4, height: 0 })
        );
    }

    // ── solid ─────────────────────────────────────────────────────────────

    #[test]
    fn solid_is_false_out_of_bounds() {
        let p = plane(2, 2, &[255; 4], 1);
        assert!(!p.solid(2, 0));
        assert!(!p.solid(0, 2));
        assert!(!p.solid(u32::MAX, u32::MAX));
    }

    // ── hit_test ──────────────────────────────────────────────────────────

    #[test]
    fn hit_test_floors_fractional_points() {
        let p = plane(2, 1, &[255, 0], 128);
        assert!(p.hit_test(Vec2::new(0.0, 0.0)));
        assert!(p.hit_test(Vec2::new(0.9, 0.9)));
        assert!(!p.hit_test(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn hit_test_misses_outside_bounds() {
        let p = plane(2, 2, &[255; 4], 1);
        assert!(!p.hit_test(Vec2::new(-0.1, 0.0)));
        assert!(!p.hit_test(Vec2::new(0.0, -0.1)));
        assert!(!p.hit_test(Vec2::new(2.0, 0.0)));
        assert!(!p.hit_test(Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn hit_test_misses_non_finite_points() {
        let p = plane(1, 1, &[255], 1);
        assert!(!p.hit_test(Vec2::new(f32::NAN, 0.0)));
        assert!(!p.hit_test(Vec2::new(0.0, f32::INFINITY)));
    }
}
