pub mod contour;
pub mod curve;
pub mod surface;

pub use contour::{Contour, ContourSegment};
pub use curve::{CatmullRom, CurveDomain, HeartCurve, PlanarCurve};
pub use surface::Plane;
