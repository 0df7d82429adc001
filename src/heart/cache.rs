use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::tessellation::TriangleMesh;

use super::{BuildHeart, HeartResolution, HeartTuning};

/// Exact bit patterns of the inputs, so `0.1 + 0.2` and `0.3` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    radius: u64,
    height: u64,
}

impl CacheKey {
    fn new(radius: f64, height: f64) -> Self {
        Self {
            radius: radius.to_bits(),
            height: height.to_bits(),
        }
    }
}

/// Single-slot memo over [`BuildHeart`].
///
/// A heart is rebuilt only when the `(radius, height)` pair changes.
#[derive(Debug, Default)]
pub struct HeartCache {
    tuning: HeartTuning,
    resolution: HeartResolution,
    slot: Option<(CacheKey, Arc<TriangleMesh>)>,
}

impl HeartCache {
    /// Creates an empty cache that builds with the given settings.
    #[must_use]
    pub fn new(tuning: HeartTuning, resolution: HeartResolution) -> Self {
        Self {
            tuning,
            resolution,
            slot: None,
        }
    }

    /// Returns the mesh for `(radius, height)`, building it on a miss.
    ///
    /// Failed builds leave the previous entry in place.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`BuildHeart::execute`].
    pub fn get_or_build(&mut self, radius: f64, height: f64) -> Result<Arc<TriangleMesh>> {
        let key = CacheKey::new(radius, height);
        if let Some((cached, mesh)) = &self.slot {
            if *cached == key {
                trace!(radius, height, "heart cache hit");
                return Ok(Arc::clone(mesh));
            }
        }
        let mesh = Arc::new(
            BuildHeart::new(radius, height)
                .with_tuning(self.tuning)
                .with_resolution(self.resolution)
                .execute()?,
        );
        self.slot = Some((key, Arc::clone(&mesh)));
        Ok(mesh)
    }

    /// Whether the slot holds the mesh for exactly `(radius, height)`.
    #[must_use]
    pub fn contains(&self, radius: f64, height: f64) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|(key, _)| *key == CacheKey::new(radius, height))
    }

    /// Drops the cached mesh.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
