use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::{SolidId, TopologyStore};

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid's topology is incomplete.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        GeneralTransform::new(self.solid, Matrix4::new_translation(&self.displacement))
            .execute(store)
    }
}
