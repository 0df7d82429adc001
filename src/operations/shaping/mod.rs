mod extrude;
mod extrude_contour;

pub use extrude::Extrude;
pub use extrude_contour::{ExtrudeContour, ExtrudeOptions};
