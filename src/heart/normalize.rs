use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::transform::{Rotate, Scale, Translate};
use crate::topology::{SolidId, TopologyStore};

/// Stands an extruded heart up and sizes it.
///
/// The extrusion axis (+Z) is turned onto +Y, the solid is centered on its
/// bounding box, then X is scaled to a width of `2 * radius` and Z by the
/// same factor times `length_scale`. Y keeps the extrusion depth.
///
/// Every step goes through [`GeneralTransform`](crate::operations::transform::GeneralTransform),
/// so face planes and therefore mesh normals are rebuilt from the moved
/// vertices.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the solid has no width.
pub(crate) fn normalize(
    store: &mut TopologyStore,
    solid: SolidId,
    radius: f64,
    length_scale: f64,
) -> Result<Aabb> {
    Rotate::new(solid, Point3::origin(), Vector3::x(), -FRAC_PI_2).execute(store)?;

    let upright = BoundingBox::new(solid).execute(store)?;
    Translate::new(solid, -upright.center().coords).execute(store)?;

    let width = upright.size().x;
    if width < TOLERANCE {
        return Err(GeometryError::Degenerate("heart profile has no width".into()).into());
    }
    let s = 2.0 * radius / width;
    Scale::non_uniform(solid, Point3::origin(), Vector3::new(s, 1.0, s * length_scale))
        .execute(store)?;

    let sized = BoundingBox::new(solid).execute(store)?;
    trace!(min = ?sized.min, max = ?sized.max, scale = s, "normalized heart");
    Ok(sized)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::creation::{MakeFace, MakeWire};
    use crate::operations::shaping::Extrude;

    #[test]
    fn prism_is_stood_up_centered_and_sized() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(8.0, 0.0, 0.0),
                Point3::new(8.0, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire).execute(&mut store).unwrap();
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let bb = normalize(&mut store, solid, 2.0, 0.5).unwrap();
        let size = bb.size();
        // width 8 -> 4, profile height 4 -> depth 4 * 0.5 * 0.5, extrusion 3 -> up
        assert_relative_eq!(size.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(size.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(size.z, 1.0, epsilon = 1e-12);
        assert!(bb.center().coords.norm() < 1e-12);
    }
}
