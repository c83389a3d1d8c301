use crate::bodies::{Body, BodyFlags, BodyShape};
use crate::collision::{ColliderRect, ContactSide, SideOverlaps};
use crate::core::{SimulationConfig, WorldBounds};
use crate::integration::LaunchState;
use crate::math::Vector2;

/// A static surface the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BounceSurface {
    Floor,
    Ceiling,
    LeftWall,
    RightWall,

    /// A collider rectangle, by index in the current collider list
    Collider {
        index: usize,
        side: ContactSide,
    },
}

/// Starts a new parabola from the ball's current position and velocity
#[inline]
fn relaunch_from(ball: &Body, launch: &mut LaunchState) {
    launch.relaunch(ball.position, ball.velocity);
}

/// Clamps the ball inside the world edges, reflecting velocity with the
/// world restitution. Each edge hit is appended to `hits` in the order floor,
/// ceiling, left wall, right wall.
pub fn resolve_ball_bounds(
    ball: &mut Body,
    launch: &mut LaunchState,
    bounds: &WorldBounds,
    config: &SimulationConfig,
    hits: &mut Vec<BounceSurface>,
) {
    let BodyShape::Ball { radius } = ball.shape else {
        return;
    };
    let restitution = config.restitution;

    if ball.position.y + radius > bounds.floor() {
        ball.position.y = bounds.floor() - radius;
        ball.velocity = Vector2::new(
            ball.velocity.x * config.floor_rolling_friction,
            -ball.velocity.y * restitution,
        );
        relaunch_from(ball, launch);
        hits.push(BounceSurface::Floor);
    }

    if ball.position.y - radius < bounds.ceiling() {
        ball.position.y = bounds.ceiling() + radius;
        ball.velocity.y = -ball.velocity.y * restitution;
        relaunch_from(ball, launch);
        hits.push(BounceSurface::Ceiling);
    }

    let left_wall = bounds.left_wall();
    if ball.position.x - radius < left_wall {
        ball.position.x = left_wall + radius;
        ball.velocity.x = -ball.velocity.x * restitution;
        relaunch_from(ball, launch);
        hits.push(BounceSurface::LeftWall);
    }

    let right_wall = bounds.right_wall(config.right_wall_margin);
    if ball.position.x + radius > right_wall {
        ball.position.x = right_wall - radius;
        ball.velocity.x = -ball.velocity.x * restitution;
        relaunch_from(ball, launch);
        hits.push(BounceSurface::RightWall);
    }
}

/// Jitter suppression: a ball crawling along the floor comes to rest.
///
/// Zeroes the vertical velocity (and a negligible horizontal one), restarts
/// the parabola from the current point and clears `LAUNCHED`. Returns whether
/// the ball is resting.
pub fn settle_ball(
    ball: &mut Body,
    launch: &mut LaunchState,
    bounds: &WorldBounds,
    config: &SimulationConfig,
) -> bool {
    let BodyShape::Ball { radius } = ball.shape else {
        return false;
    };

    let near_floor = ball.position.y + radius >= bounds.floor() - config.rest_distance;
    if !near_floor || ball.velocity.y.abs() >= config.rest_velocity_threshold {
        return false;
    }

    ball.velocity.y = 0.0;
    if ball.velocity.x.abs() < config.rest_horizontal_threshold {
        ball.velocity.x = 0.0;
    }
    relaunch_from(ball, launch);
    ball.flags.remove(BodyFlags::LAUNCHED);
    true
}

/// Bounces the ball off every collider rectangle it penetrates.
///
/// The ball is pushed onto the face of least penetration and the matching
/// velocity component is reflected at half the world restitution, so cards
/// feel softer than walls.
pub fn resolve_ball_colliders(
    ball: &mut Body,
    launch: &mut LaunchState,
    colliders: &[ColliderRect],
    config: &SimulationConfig,
    hits: &mut Vec<BounceSurface>,
) {
    let BodyShape::Ball { radius } = ball.shape else {
        return;
    };
    let damping = config.restitution / 2.0;

    for (index, rect) in colliders.iter().enumerate() {
        let rect = rect.to_aabb();
        let overlaps = SideOverlaps::between(&ball.bounds(), &rect);
        let Some(side) = overlaps.penetrating_side() else {
            continue;
        };

        match side {
            ContactSide::Left => {
                ball.position.x = rect.left() - radius;
                ball.velocity.x = -ball.velocity.x.abs() * damping;
            }
            ContactSide::Right => {
                ball.position.x = rect.right() + radius;
                ball.velocity.x = ball.velocity.x.abs() * damping;
            }
            ContactSide::Top => {
                ball.position.y = rect.top() - radius;
                ball.velocity.y = -ball.velocity.y.abs() * damping;
            }
            ContactSide::Bottom => {
                ball.position.y = rect.bottom() + radius;
                ball.velocity.y = ball.velocity.y.abs() * damping;
            }
        }

        relaunch_from(ball, launch);
        hits.push(BounceSurface::Collider { index, side });
    }
}

/// Floor contact for a block, run between its vertical and horizontal steps.
///
/// Bounces with the block restitution, settles slow bounces to exactly zero
/// and applies Coulomb friction unless the block was just hit.
pub fn resolve_block_floor(block: &mut Body, bounds: &WorldBounds, config: &SimulationConfig) {
    let BodyShape::Block { height, .. } = block.shape else {
        return;
    };
    let half_height = height / 2.0;

    if block.position.y + half_height < bounds.floor() {
        return;
    }

    block.position.y = bounds.floor() - half_height;
    block.velocity.y = -block.velocity.y * config.block_restitution;
    if block.velocity.y.abs() < config.rest_velocity_threshold {
        block.velocity.y = 0.0;
    }

    if block.velocity.x != 0.0 && !block.just_collided() {
        let friction = config.friction_coefficient * block.mass * config.gravity;
        let direction = block.velocity.x.signum();
        block.velocity.x -= direction * friction;

        // friction stops a block, it never reverses it
        if block.velocity.x.signum() != direction {
            block.velocity.x = 0.0;
        }
    }
}
