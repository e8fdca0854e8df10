use super::AlphaSource;

/// Borrowed RGBA8 pixel buffer: 4 bytes per pixel, row-major, tightly
/// packed, straight alpha in the fourth byte.
#[derive(Debug, Copy, Clone)]
pub struct Rgba8Buffer<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> Rgba8Buffer<'a> {
    /// Returns `None` when `pixels` is not exactly `4 * width * height`
    /// bytes long.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Option<Self> {
        let expected = 4usize
            .checked_mul(width as usize)?
            .checked_mul(height as usize)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self { width, height, pixels })
    }
}

impl AlphaSource for Rgba8Buffer<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn has_alpha(&self) -> bool {
        true
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        let pixel = y as usize * self.width as usize + x as usize;
        self.pixels[4 * pixel + 3]
    }
}

/// Borrowed A8 plane: one alpha byte per pixel, row-major.
#[derive(Debug, Copy, Clone)]
pub struct AlphaBuffer<'a> {
    width: u32,
    height: u32,
    samples: &'a [u8],
}

impl<'a> AlphaBuffer<'a> {
    /// Returns `None` when `samples` is not exactly `width * height` bytes.
    pub fn new(width: u32, height: u32, samples: &'a [u8]) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        if samples.len() != expected {
            return None;
        }
        Some(Self { width, height, samples })
    }
}

impl AlphaSource for AlphaBuffer<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn has_alpha(&self) -> bool {
        true
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.samples[y as usize * self.width as usize + x as usize]
    }
}
