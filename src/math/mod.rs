pub mod bounds_2d;
pub mod normalize;
pub mod rotation;
pub mod vertex_2d;

pub use bounds_2d::{Aabb2, Bounds};
pub use normalize::NormalizedShape;
pub use rotation::{RotateDirection, RotationSet};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Planar rotation about the Z axis.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance used when comparing angles against rotation set members.
pub const ANGLE_TOLERANCE: f64 = 1e-5;

/// Default tolerance for vertex value equality.
///
/// Kept well below the quantization step (`1e-4`) so neighbouring grid
/// values never compare equal.
pub const VERTEX_TOLERANCE: f64 = 1e-6;

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_vector(v: Vector2, angle: f64) -> Vector2 {
    Rotation2::new(angle) * v
}
