use crate::geometry::surface::Plane;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// A planar face bounded by a single closed wire.
///
/// The plane normal points out of the solid and agrees with the wire's
/// winding (right-hand rule).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Supporting plane of the face.
    pub plane: Plane,
    /// The boundary wire.
    pub outer_wire: WireId,
}
