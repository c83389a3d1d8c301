#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The rectangle the ball must stay inside.
///
/// The left wall sits at `-viewport_center_x` so the ball can travel to the
/// middle of the screen while the camera rests at world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub viewport_center_x: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32, viewport_center_x: f32) -> Self {
        Self {
            width,
            height,
            viewport_center_x,
        }
    }

    /// y coordinate of the floor
    #[inline]
    pub fn floor(&self) -> f32 {
        self.height
    }

    /// y coordinate of the ceiling
    #[inline]
    pub fn ceiling(&self) -> f32 {
        0.0
    }

    /// x coordinate of the left wall
    #[inline]
    pub fn left_wall(&self) -> f32 {
        -self.viewport_center_x
    }

    /// x coordinate of the right wall, `margin` past the world width
    #[inline]
    pub fn right_wall(&self, margin: f32) -> f32 {
        self.width + margin
    }
}
