use crate::math::Aabb;

/// The face of a rectangle that a moving shape ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Hit from above; the shape ends up resting on the top face
    Top,

    /// Hit from below
    Bottom,

    /// Hit while travelling right, against the left face
    Left,

    /// Hit while travelling left, against the right face
    Right,
}

/// Axis along which two overlapping blocks were pushed apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationAxis {
    Horizontal,
    Vertical,
}

/// Directional penetration of a moving box into a rectangle, one value per
/// rectangle face. The smallest one is the minimum translation direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideOverlaps {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl SideOverlaps {
    /// Overlaps of `mover` (the ball's bounding box) against `rect`
    pub fn between(mover: &Aabb, rect: &Aabb) -> Self {
        Self {
            top: mover.bottom() - rect.top(),
            bottom: rect.bottom() - mover.top(),
            left: mover.right() - rect.left(),
            right: rect.right() - mover.left(),
        }
    }

    /// Face with the smallest overlap, along with that overlap.
    ///
    /// Exact ties resolve in the order top, bottom, left, right: a shape that
    /// lands precisely on a corner is treated as landing on the face.
    pub fn min_side(&self) -> (ContactSide, f32) {
        let candidates = [
            (ContactSide::Top, self.top),
            (ContactSide::Bottom, self.bottom),
            (ContactSide::Left, self.left),
            (ContactSide::Right, self.right),
        ];

        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.1 < best.1 {
                best = *candidate;
            }
        }
        best
    }

    /// Face of actual penetration, or `None` when the boxes only touch or are apart
    pub fn penetrating_side(&self) -> Option<ContactSide> {
        let (side, depth) = self.min_side();
        (depth > 0.0).then_some(side)
    }
}
