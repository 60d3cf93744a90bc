use crate::math::{RotationSet, Vector2, VERTEX_TOLERANCE};

/// Parameters controlling snapping and piece creation.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Legal rotation angles.
    pub rotations: RotationSet,
    /// Per-axis snap distance for a bare piece.
    pub piece_connection_distance: Vector2,
    /// Per-axis snap distance for a group.
    pub group_connection_distance: Vector2,
    /// Tolerance for vertex value equality.
    pub vertex_tolerance: f64,
    /// When `false`, new pieces start unrotated.
    pub allow_rotation: bool,
    /// Seed for placement and rotation randomness; drawn from the thread
    /// RNG when `None`.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rotations: RotationSet::quarter_turns(),
            piece_connection_distance: Vector2::new(40.0, 40.0),
            group_connection_distance: Vector2::new(50.0, 50.0),
            vertex_tolerance: VERTEX_TOLERANCE,
            allow_rotation: true,
            seed: None,
        }
    }
}
