use std::sync::{Arc, RwLock};

use crate::coords::Vec2;
use crate::error::FeedError;
use crate::mask::MaskPlane;
use crate::source::AlphaSource;

/// Cloneable mask handle for callers that feed and query from different
/// threads.
///
/// Replace-then-publish: `feed` builds the new plane entirely outside the
/// lock and the write section is a single `Arc` swap. Readers clone the
/// published `Arc` under the read lock and query it lock-free, so they
/// observe either the fully-old or the fully-new plane, never a partial one.
#[derive(Debug, Clone)]
pub struct SharedAlphaMask {
    threshold: u8,
    plane: Arc<RwLock<Option<Arc<MaskPlane>>>>,
}

impl SharedAlphaMask {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            plane: Arc::new(RwLock::new(None)),
        }
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Builds and publishes a new plane, replacing any previous one.
    /// On error nothing is published.
    pub fn feed(&self, src: &impl AlphaSource) -> Result<(), FeedError> {
        let plane = Arc::new(MaskPlane::from_source(src, self.threshold)?);
        // A poisoned lock only means another writer panicked between plane
        // swaps; the slot itself is always a valid Option.
        let mut slot = self.plane.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(plane);
        Ok(())
    }

    /// Snapshot of the currently published plane.
    pub fn plane(&self) -> Option<Arc<MaskPlane>> {
        self.plane
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Same answer as [`crate::AlphaMask::hit_test`] against the currently
    /// published plane.
    pub fn hit_test(&self, p: Vec2) -> bool {
        match self.plane() {
            Some(plane) => plane.hit_test(p),
            None => false,
        }
    }
}
