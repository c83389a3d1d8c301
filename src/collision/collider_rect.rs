use crate::math::Aabb;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A static hitbox reported by the layout layer (a card or folder on screen),
/// expressed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ColliderRect {
    pub left_x: f32,
    pub right_x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl ColliderRect {
    pub fn new(left_x: f32, right_x: f32, top_y: f32, bottom_y: f32) -> Self {
        Self {
            left_x,
            right_x,
            top_y,
            bottom_y,
        }
    }

    #[inline]
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_edges(self.left_x, self.right_x, self.top_y, self.bottom_y)
    }
}

impl From<ColliderRect> for Aabb {
    fn from(rect: ColliderRect) -> Self {
        rect.to_aabb()
    }
}

impl From<Aabb> for ColliderRect {
    fn from(aabb: Aabb) -> Self {
        Self::new(aabb.left(), aabb.right(), aabb.top(), aabb.bottom())
    }
}
