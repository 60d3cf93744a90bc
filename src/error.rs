use thiserror::Error;

/// Top-level error type for the snapfit puzzle core.
#[derive(Debug, Error)]
pub enum SnapfitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Rotation(#[from] RotationError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to vertex geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("vertex set is empty")]
    EmptyVertexSet,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to entity bookkeeping on the board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("entity is a group member, not a top-level entity")]
    NotTopLevel,

    #[error("group has no children")]
    EmptyGroup,
}

/// Errors related to the discrete rotation set.
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("rotation set must contain at least one angle")]
    EmptySet,

    #[error("angle {0} is not a member of the rotation set")]
    NotInSet(f64),
}

/// Errors related to board operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`SnapfitError`].
pub type Result<T> = std::result::Result<T, SnapfitError>;
