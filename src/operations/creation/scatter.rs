use rand::Rng;

use crate::board::Board;
use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Spreads every top-level entity at random over the area around an image.
///
/// Each pivot lands uniformly in `[-w/1.5, w/1.5] × [-h/1.5, h/1.5]` for an
/// image of `w × h`.
pub struct Scatter {
    width: f64,
    height: f64,
}

impl Scatter {
    /// Creates a new `Scatter` operation for an image of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the operation, repositioning every registered entity.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the size is negative or not
    /// finite.
    pub fn execute(&self, board: &mut Board) -> Result<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(OperationError::InvalidInput(format!("{name} = {v}")).into());
            }
        }
        let (hx, hy) = (self.width / 1.5, self.height / 1.5);

        for id in board.registry().to_vec() {
            let x = board.rng().random_range(-hx..=hx);
            let y = board.rng().random_range(-hy..=hy);
            let entity = board.top_level_mut(id)?;
            entity.position = Point2::new(x, y) - entity.home();
        }
        Ok(())
    }
}
