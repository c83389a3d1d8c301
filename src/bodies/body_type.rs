use crate::math::{Aabb, Vector2};

/// Which kind of entity a body is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The launched projectile. There is exactly one per world.
    Ball,

    /// A rectangular mass block spawned into the world
    Block,
}

/// Collision geometry of a body, tagged by kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    /// A circle centered on the body position
    Ball {
        radius: f32,
    },

    /// An axis-aligned rectangle centered on the body position
    Block {
        width: f32,
        height: f32,
    },
}

impl BodyShape {
    /// Returns the kind discriminator for this shape
    #[inline]
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Ball { .. } => BodyKind::Ball,
            Self::Block { .. } => BodyKind::Block,
        }
    }

    /// Half extents of the shape's bounding box
    #[inline]
    pub fn half_extents(&self) -> Vector2 {
        match *self {
            Self::Ball { radius } => Vector2::new(radius, radius),
            Self::Block { width, height } => Vector2::new(width / 2.0, height / 2.0),
        }
    }

    /// Bounding box of the shape placed at `center`
    #[inline]
    pub fn bounds_at(&self, center: Vector2) -> Aabb {
        Aabb::from_center_half_extents(center, self.half_extents())
    }
}
