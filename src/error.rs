use thiserror::Error;

/// Any failure while building a cake body, from curve evaluation down to
/// triangulation.
#[derive(Debug, Error)]
pub enum CakeformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Invalid numbers or shapes that enclose nothing.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Broken references or malformed entities in the topology store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Bad arguments passed to a modeling operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Faces that cannot be triangulated.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("face boundary crosses itself")]
    SelfIntersecting,

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`CakeformError`].
pub type Result<T> = std::result::Result<T, CakeformError>;
