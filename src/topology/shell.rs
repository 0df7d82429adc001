use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a shell in the topology store.
    pub struct ShellId;
}

/// Faces stitched along shared edges.
///
/// Only closed shells can bound a solid.
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<FaceId>,
    /// Watertight: every edge is shared by exactly two faces.
    pub is_closed: bool,
}

impl ShellData {
    /// A watertight shell over `faces`.
    #[must_use]
    pub fn closed(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            is_closed: true,
        }
    }

    /// A shell with free boundary edges.
    #[must_use]
    pub fn open(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            is_closed: false,
        }
    }
}
