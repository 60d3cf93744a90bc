use std::f64::consts::{FRAC_PI_2, PI};

use super::ANGLE_TOLERANCE;
use crate::error::{Result, RotationError};

/// Direction of a discrete rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    /// Step to the previous angle in the set.
    Left,
    /// Step to the next angle in the set.
    Right,
}

/// Ordered, finite set of legal rotation angles in radians.
///
/// Stepping past either end wraps around to the opposite end.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSet {
    angles: Vec<f64>,
}

impl RotationSet {
    /// Creates a rotation set from an ordered list of angles.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::EmptySet` if `angles` is empty.
    pub fn new(angles: Vec<f64>) -> Result<Self> {
        if angles.is_empty() {
            return Err(RotationError::EmptySet.into());
        }
        Ok(Self { angles })
    }

    /// The four quarter turns `[0, π/2, π, 3π/2]`.
    #[must_use]
    pub fn quarter_turns() -> Self {
        Self {
            angles: vec![0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2],
        }
    }

    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Angle at `index`, wrapping.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.angles[index % self.angles.len()]
    }

    /// Index of the member equal to `angle` within [`ANGLE_TOLERANCE`].
    #[must_use]
    pub fn index_of(&self, angle: f64) -> Option<usize> {
        self.angles
            .iter()
            .position(|a| (a - angle).abs() < ANGLE_TOLERANCE)
    }

    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        self.index_of(angle).is_some()
    }

    /// Returns the member adjacent to `angle` in `direction`, or `None` if
    /// `angle` is not a member.
    #[must_use]
    pub fn step(&self, angle: f64, direction: RotateDirection) -> Option<f64> {
        let i = self.index_of(angle)?;
        let n = self.angles.len();
        let next = match direction {
            RotateDirection::Right => (i + 1) % n,
            RotateDirection::Left => (i + n - 1) % n,
        };
        Some(self.angles[next])
    }
}

impl Default for RotationSet {
    fn default() -> Self {
        Self::quarter_turns()
    }
}

/// Returns `true` if two angles are equal within [`ANGLE_TOLERANCE`].
#[must_use]
pub fn same_angle(a: f64, b: f64) -> bool {
    (a - b).abs() < ANGLE_TOLERANCE
}
