use super::edge::{EdgeData, EdgeId};
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// An edge together with the direction it is walked in a wire.
#[derive(Debug, Clone, Copy)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    /// `true` walks the edge start → end, `false` end → start.
    pub forward: bool,
}

impl OrientedEdge {
    /// Creates a new oriented edge.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }

    /// Vertex this traversal leaves from.
    #[must_use]
    pub fn leading(&self, data: &EdgeData) -> VertexId {
        if self.forward {
            data.start
        } else {
            data.end
        }
    }

    /// Vertex this traversal arrives at.
    #[must_use]
    pub fn trailing(&self, data: &EdgeData) -> VertexId {
        if self.forward {
            data.end
        } else {
            data.start
        }
    }
}

/// An ordered chain of oriented edges, open or closed.
#[derive(Debug, Clone)]
pub struct WireData {
    pub edges: Vec<OrientedEdge>,
    /// Whether the last edge ends where the first one starts.
    pub is_closed: bool,
}

impl WireData {
    #[must_use]
    pub fn new(edges: Vec<OrientedEdge>, is_closed: bool) -> Self {
        Self { edges, is_closed }
    }
}
