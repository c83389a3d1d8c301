use crate::bodies::{Body, BodyShape};
use crate::collision::{circle_intersects_aabb, elastic_1d, ContactSide, SideOverlaps};
use crate::core::SimulationConfig;

/// Whether the ball currently touches the block (closest-point test)
pub fn ball_block_collision(ball: &Body, block: &Body) -> bool {
    match ball.shape {
        BodyShape::Ball { radius } => circle_intersects_aabb(ball.position, radius, &block.bounds()),
        BodyShape::Block { .. } => false,
    }
}

/// Resolves a ball hitting a block and returns the block face that was hit.
///
/// The ball is pushed out of the block first, then velocities are updated:
/// - from above the block acts like a floor and is left untouched;
/// - from below the y velocities exchange momentum and the block is flung up;
/// - from the sides the x velocities exchange momentum and the block pops up.
///
/// The caller must restart the ball's parabola from its new state. The block
/// is flagged `JUST_COLLIDED`. Returns `None` when the shapes do not overlap.
pub fn resolve_ball_block(
    ball: &mut Body,
    block: &mut Body,
    config: &SimulationConfig,
) -> Option<ContactSide> {
    let BodyShape::Ball { radius } = ball.shape else {
        return None;
    };
    if !matches!(block.shape, BodyShape::Block { .. }) {
        return None;
    }

    let rect = block.bounds();
    let side = SideOverlaps::between(&ball.bounds(), &rect).penetrating_side()?;

    let energy_before = ball.kinetic_energy() + block.kinetic_energy();
    let restitution = config.restitution;
    let buffer = config.separation_buffer;

    match side {
        ContactSide::Top => {
            ball.position.y = rect.top() - radius - buffer;
            ball.velocity.y = -ball.velocity.y.abs() * (restitution / 2.0);
        }
        ContactSide::Bottom => {
            ball.position.y = rect.bottom() + radius + buffer;

            let (ball_vy, block_vy) =
                elastic_1d(ball.mass, ball.velocity.y, block.mass, block.velocity.y);
            ball.velocity.y = ball_vy * (restitution / 2.0);
            block.velocity.y = block_vy * restitution * config.launch_amplification;
            block.velocity.x += ball.velocity.x * config.horizontal_knock;
        }
        ContactSide::Left | ContactSide::Right => {
            ball.position.x = if side == ContactSide::Left {
                rect.left() - radius - buffer
            } else {
                rect.right() + radius + buffer
            };

            let (ball_vx, block_vx) =
                elastic_1d(ball.mass, ball.velocity.x, block.mass, block.velocity.x);
            ball.velocity.x = ball_vx * restitution;
            block.velocity.x = block_vx * restitution * config.knock_amplification;
            block.velocity.y = -ball.velocity.length() * config.vertical_pop;
        }
    }

    if config.energy_clamp {
        clamp_block_energy(ball, block, energy_before);
    }

    block.mark_collided();
    Some(side)
}

/// Scales the block's velocity so the pair never ends with more kinetic
/// energy than it started with. The ball keeps its post-hit velocity; the
/// block gets whatever budget is left, possibly none.
fn clamp_block_energy(ball: &Body, block: &mut Body, energy_before: f32) {
    let budget = (energy_before - ball.kinetic_energy()).max(0.0);
    let block_energy = block.kinetic_energy();
    if block_energy > budget && block_energy > 0.0 {
        block.velocity *= (budget / block_energy).sqrt();
    }
}
