use image::{DynamicImage, GenericImageView};

use super::AlphaSource;

/// Decoded images straight from the `image` crate.
///
/// `has_alpha` follows the decoded color type, so a JPEG (RGB8) is rejected
/// at feed time while a PNG with transparency (RGBA8) samples its real
/// alpha channel. `get_pixel` already normalizes every format to RGBA8.
impl AlphaSource for DynamicImage {
    #[inline]
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    #[inline]
    fn has_alpha(&self) -> bool {
        self.color().has_alpha()
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        GenericImageView::get_pixel(self, x, y).0[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn rgba_image_reports_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_raw(
            2,
            1,
            vec![10, 20, 30, 200, 40, 50, 60, 7],
        )
        .unwrap());

        assert!(img.has_alpha());
        assert_eq!(AlphaSource::width(&img), 2);
        assert_eq!(AlphaSource::height(&img), 1);
        assert_eq!(img.alpha(0, 0), 200);
        assert_eq!(img.alpha(1, 0), 7);
    }

    #[test]
    fn rgb_image_reports_no_alpha() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(1, 1, vec![1, 2, 3]).unwrap());
        assert!(!img.has_alpha());
    }
}
