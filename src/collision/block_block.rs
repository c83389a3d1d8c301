use crate::bodies::Body;
use crate::collision::{aabb_overlap, elastic_1d, SeparationAxis};
use crate::core::SimulationConfig;

/// Whether two blocks overlap or touch
pub fn block_collision(a: &Body, b: &Body) -> bool {
    aabb_overlap(&a.bounds(), &b.bounds())
}

/// Resolves two overlapping blocks along the axis of least penetration.
///
/// Horizontal contact exchanges x momentum with the block restitution.
/// Vertical contact exchanges momentum on both axes independently so pushes
/// travel through stacks; an axis where both blocks are slower than the
/// threshold is treated as resting contact. Returns `None` when the blocks
/// only touch or are apart.
pub fn resolve_block_block(
    a: &mut Body,
    b: &mut Body,
    config: &SimulationConfig,
) -> Option<SeparationAxis> {
    let overlap = a.bounds().overlap_extents(&b.bounds());
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let (m1, m2) = (a.mass, b.mass);
    let threshold = config.block_velocity_threshold;

    let axis = if overlap.x < overlap.y {
        let (v1, v2) = elastic_1d(m1, a.velocity.x, m2, b.velocity.x);
        a.velocity.x = v1 * config.block_restitution;
        b.velocity.x = v2 * config.block_restitution;

        let separation = overlap.x / 2.0 + config.block_separation_buffer;
        if a.position.x < b.position.x {
            a.position.x -= separation;
            b.position.x += separation;
        } else {
            a.position.x += separation;
            b.position.x -= separation;
        }

        SeparationAxis::Horizontal
    } else {
        let separation = overlap.y / 2.0 + config.block_separation_buffer;
        if a.position.y < b.position.y {
            a.position.y -= separation;
            b.position.y += separation;
        } else {
            a.position.y += separation;
            b.position.y -= separation;
        }

        if a.velocity.y.abs() > threshold || b.velocity.y.abs() > threshold {
            let (v1, v2) = elastic_1d(m1, a.velocity.y, m2, b.velocity.y);
            a.velocity.y = v1 * config.block_vertical_restitution;
            b.velocity.y = v2 * config.block_vertical_restitution;
        } else {
            a.velocity.y = 0.0;
            b.velocity.y = 0.0;
        }

        if a.velocity.x.abs() > threshold || b.velocity.x.abs() > threshold {
            let (v1, v2) = elastic_1d(m1, a.velocity.x, m2, b.velocity.x);
            a.velocity.x = v1 * config.block_knock_restitution;
            b.velocity.x = v2 * config.block_knock_restitution;
        }

        SeparationAxis::Vertical
    };

    a.mark_collided();
    b.mark_collided();
    Some(axis)
}
