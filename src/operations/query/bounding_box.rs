use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::topology::{SolidId, TopologyStore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing all `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: acc.min.inf(p),
                max: acc.max.sup(p),
            },
        ))
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Extent of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a solid from its vertices.
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or has no vertices.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut points = Vec::new();
        for vid in store.solid_vertices(self.solid)? {
            points.push(store.vertex(vid)?.point);
        }
        Aabb::from_points(&points)
            .ok_or_else(|| GeometryError::Degenerate("solid has no vertices".into()).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeFace, MakeWire};
    use crate::operations::shaping::Extrude;

    #[test]
    fn from_points_tracks_extremes() {
        let pts = [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-4.0, 5.0, 0.0),
            Point3::new(2.0, 0.0, -1.0),
        ];
        let bb = Aabb::from_points(&pts).unwrap();
        assert_eq!(bb.min, Point3::new(-4.0, -2.0, -1.0));
        assert_eq!(bb.max, Point3::new(2.0, 5.0, 3.0));
        assert!((bb.center() - Point3::new(-1.0, 1.5, 1.0)).norm() < 1e-12);
        assert!((bb.size() - Vector3::new(6.0, 7.0, 4.0)).norm() < 1e-12);
    }

    #[test]
    fn empty_input_has_no_box() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn extruded_triangle_box() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(1.5, 2.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire).execute(&mut store).unwrap();
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 4.0))
            .execute(&mut store)
            .unwrap();

        let bb = BoundingBox::new(solid).execute(&store).unwrap();
        assert!((bb.size() - Vector3::new(3.0, 2.0, 4.0)).norm() < 1e-12);
    }
}
