use std::fmt;

/// A rejected feed. The previously published mask, if any, is left unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FeedError {
    /// The source has a zero pixel dimension; no occupancy map can be sized.
    EmptyImage { width: u32, height: u32 },
    /// The source carries no alpha channel, so per-pixel opacity is undefined.
    OpaqueSource,
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::EmptyImage { width, height } => {
                write!(f, "cannot build mask from {width}x{height} image")
            }
            FeedError::OpaqueSource => {
                write!(f, "source image has no alpha channel")
            }
        }
    }
}

impl std::error::Error for FeedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_dimensions() {
        let e = FeedError::EmptyImage { width: 0, height: 12 };
        assert_eq!(e.to_string(), "cannot build mask from 0x12 image");
    }

    #[test]
    fn display_opaque_source() {
        assert_eq!(
            FeedError::OpaqueSource.to_string(),
            "source image has no alpha channel"
        );
    }
}
