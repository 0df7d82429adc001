use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Carries an orthonormal frame `(u_dir, v_dir, normal)` with
/// `u_dir × v_dir = normal`, so counter-clockwise loops in `(u, v)` face
/// along the normal.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are derived from the normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        // Reference axis must not be parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };

        let u_dir = reference.cross(&normal).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Projects a point onto the plane's `(u, v)` frame.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u_dir), d.dot(&self.v_dir))
    }

    /// Signed distance of `point` from the plane along its normal.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_right_handed() {
        for n in [
            Vector3::z(),
            -Vector3::z(),
            Vector3::x(),
            Vector3::new(1.0, 2.0, -3.0),
        ] {
            let plane = Plane::from_normal(Point3::origin(), n).unwrap();
            let cross = plane.u_dir().cross(plane.v_dir());
            assert!((cross - plane.normal()).norm() < 1e-12);
            assert!(plane.u_dir().dot(plane.normal()).abs() < 1e-12);
        }
    }

    #[test]
    fn project_round_trips_in_plane_points() {
        let plane = Plane::from_normal(Point3::new(1.0, 2.0, 3.0), Vector3::z()).unwrap();
        let uv = plane.project(&Point3::new(4.0, -1.0, 3.0));
        let back = plane.origin() + plane.u_dir() * uv.x + plane.v_dir() * uv.y;
        assert!((back - Point3::new(4.0, -1.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert!((plane.signed_distance(&Point3::new(5.0, 5.0, 1.5)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::from_normal(Point3::origin(), Vector3::zeros()).is_err());
    }
}
