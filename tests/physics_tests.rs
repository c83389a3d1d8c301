use approx::assert_relative_eq;
use folio_physics::collision::circle_intersects_aabb;
use folio_physics::error::PhysicsError;
use folio_physics::{
    BlockDesc, BodyId, BounceSurface, ColliderRect, ContactSide, PhysicsWorld, SimulationConfig,
    Vector2, WorldBounds, WorldEvent,
};

const BALL_RADIUS: f32 = 18.0;

fn floor_world(start: Vector2, colliders: Vec<ColliderRect>) -> PhysicsWorld {
    let bounds = WorldBounds::new(2000.0, 600.0, 400.0);
    PhysicsWorld::new(start, BALL_RADIUS, bounds, colliders).unwrap()
}

fn is_floor_bounce(event: &WorldEvent) -> bool {
    matches!(
        event,
        WorldEvent::Bounce {
            surface: BounceSurface::Floor
        }
    )
}

#[test]
fn test_world_creation() {
    let world = floor_world(Vector2::new(0.0, 582.0), Vec::new());

    assert_eq!(world.ball().get_position(), Vector2::new(0.0, 582.0));
    assert_eq!(world.ball().get_velocity(), Vector2::zero());
    assert_eq!(world.ball().get_id(), &BodyId::ball());
    assert!(world.blocks().is_empty());
    assert!(!world.is_launched());
    assert_eq!(world.get_time(), 0.0);
    assert!(world.events().is_empty());
}

#[test]
fn test_invalid_world_parameters() {
    let bounds = WorldBounds::new(2000.0, 600.0, 400.0);

    let zero_radius = PhysicsWorld::new(Vector2::zero(), 0.0, bounds, Vec::new());
    assert!(matches!(zero_radius, Err(PhysicsError::InvalidParameter(_))));

    let bouncy = SimulationConfig {
        restitution: 1.5,
        ..SimulationConfig::default()
    };
    let result = PhysicsWorld::with_config(Vector2::zero(), BALL_RADIUS, bounds, Vec::new(), bouncy);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));

    let mut world = floor_world(Vector2::new(0.0, 582.0), Vec::new());
    assert!(world.set_world_height(-10.0).is_err());
    assert!(world.set_world_height(f32::NAN).is_err());
    assert_eq!(world.bounds().height, 600.0);
}

#[test]
fn test_trajectory_independent_of_frame_pacing() {
    // Far from every edge: the ball follows one uninterrupted parabola
    let bounds = WorldBounds::new(100_000.0, 100_000.0, 400.0);
    let start = Vector2::new(0.0, 5000.0);
    let mut even = PhysicsWorld::new(start, BALL_RADIUS, bounds, Vec::new()).unwrap();
    let mut uneven = PhysicsWorld::new(start, BALL_RADIUS, bounds, Vec::new()).unwrap();
    even.set_velocity(3.0, -20.0);
    uneven.set_velocity(3.0, -20.0);

    for _ in 0..30 {
        even.update(1.0);
    }
    let pattern = [0.5, 1.5, 0.25, 0.75, 2.0, 1.0];
    for _ in 0..5 {
        for dt in pattern {
            uneven.update(dt);
        }
    }

    let expected = Vector2::new(3.0 * 30.0, 5000.0 - 20.0 * 30.0 + 0.5 * 0.8 * 30.0 * 30.0);
    assert_relative_eq!(uneven.get_time(), 30.0, epsilon = 1e-3);
    assert_relative_eq!(even.ball().get_position(), expected, epsilon = 1e-2);
    assert_relative_eq!(uneven.ball().get_position(), expected, epsilon = 1e-2);
    assert_relative_eq!(even.ball().get_velocity(), Vector2::new(3.0, 4.0), epsilon = 1e-3);
}

#[test]
fn test_floor_bounce_restarts_parabola() {
    let bounds = WorldBounds::new(100_000.0, 600.0, 400.0);
    let mut world = PhysicsWorld::new(Vector2::new(0.0, 500.0), BALL_RADIUS, bounds, Vec::new()).unwrap();
    let gravity = world.get_config().gravity;
    let restitution = world.get_config().restitution;

    world.set_velocity(200.0, -400.0);
    let launched: Vec<_> = world.drain_events().collect();
    assert_eq!(
        launched,
        vec![WorldEvent::Launched {
            velocity: Vector2::new(200.0, -400.0)
        }]
    );

    for _ in 0..50 {
        let before = *world.launch_state();
        world.update(1.0);
        let events: Vec<_> = world.drain_events().collect();
        let floor_bounces = events.iter().filter(|e| is_floor_bounce(e)).count();
        if floor_bounces == 0 {
            continue;
        }

        assert_eq!(floor_bounces, 1);
        let impact_vy = before.velocity.y + gravity * (before.elapsed + 1.0);
        let after = world.launch_state();
        assert_relative_eq!(after.origin.y, 600.0 - BALL_RADIUS);
        assert_eq!(after.elapsed, 0.0);
        assert_relative_eq!(after.velocity.y, -impact_vy * restitution, epsilon = 1e-3);
        assert_relative_eq!(after.velocity.x, before.velocity.x * 0.98, epsilon = 1e-3);
        assert!(world.is_launched());
        return;
    }
    panic!("the ball never reached the floor");
}

#[test]
fn test_ceiling_bounce_event() {
    let bounds = WorldBounds::new(100_000.0, 600.0, 400.0);
    let mut world = PhysicsWorld::new(Vector2::new(0.0, 500.0), BALL_RADIUS, bounds, Vec::new()).unwrap();
    world.set_velocity(200.0, -400.0);

    world.update(1.0);
    world.update(1.0);

    let bounces: Vec<_> = world.events().bounces().collect();
    assert_eq!(bounces, vec![BounceSurface::Ceiling]);
    assert_relative_eq!(world.ball().get_position().y, BALL_RADIUS);
    assert!(world.ball().get_velocity().y > 0.0);
}

#[test]
fn test_resting_ball_stays_put() {
    let mut world = floor_world(Vector2::new(100.0, 582.0), Vec::new());

    for _ in 0..10 {
        world.update(1.0);
        assert_eq!(world.ball().get_position(), Vector2::new(100.0, 582.0));
        assert_eq!(world.ball().get_velocity(), Vector2::zero());
    }

    // Floor contact while at rest is not a bounce
    assert!(world.events().is_empty());
}

#[test]
fn test_rolling_ball_comes_to_rest() {
    let mut world = floor_world(Vector2::new(100.0, 582.0), Vec::new());
    world.set_velocity(5.0, 0.0);
    assert!(world.is_launched());

    for _ in 0..400 {
        world.update(1.0);
    }

    assert!(!world.is_launched());
    assert_eq!(world.ball().get_velocity(), Vector2::zero());
    let resting_at = world.ball().get_position();
    assert!(resting_at.x > 100.0);

    world.update(1.0);
    assert_eq!(world.ball().get_position(), resting_at);

    let events: Vec<_> = world.drain_events().collect();
    assert!(matches!(events[0], WorldEvent::Launched { .. }));
    assert_eq!(events.iter().filter(|e| e.is_bounce()).count(), 1);
    assert!(world.events().is_empty());
}

#[test]
fn test_set_position_stops_ball() {
    let mut world = floor_world(Vector2::new(100.0, 582.0), Vec::new());
    world.set_velocity(10.0, -10.0);
    world.update(1.0);

    world.set_position(300.0, 200.0);

    assert!(!world.is_launched());
    assert_eq!(world.ball().get_position(), Vector2::new(300.0, 200.0));
    assert_eq!(world.ball().get_velocity(), Vector2::zero());
    assert_eq!(world.launch_state().elapsed, 0.0);

    // Falls straight down from the new spot
    world.update(1.0);
    assert_relative_eq!(world.ball().get_position(), Vector2::new(300.0, 200.4), epsilon = 1e-4);
}

#[test]
fn test_frame_delta_is_sanitized() {
    let mut capped = floor_world(Vector2::new(100.0, 300.0), Vec::new());
    let mut max_step = floor_world(Vector2::new(100.0, 300.0), Vec::new());
    capped.set_velocity(4.0, -6.0);
    max_step.set_velocity(4.0, -6.0);

    capped.update(10.0);
    max_step.update(2.0);
    assert_eq!(capped.ball().get_position(), max_step.ball().get_position());
    assert_eq!(capped.get_time(), 2.0);

    let position = capped.ball().get_position();
    capped.update(f32::NAN);
    capped.update(-1.0);
    capped.update(f32::INFINITY);
    assert_eq!(capped.ball().get_position(), position);
    assert_eq!(capped.get_time(), 2.0);
}

#[test]
fn test_ball_never_tunnels_into_collider() {
    let wall = ColliderRect::new(200.0, 260.0, 0.0, 600.0);
    let mut world = floor_world(Vector2::new(0.0, 500.0), vec![wall]);
    world.set_velocity(30.0, 0.0);

    for _ in 0..200 {
        world.update(1.0);
        let center = world.ball().get_position();
        assert!(!circle_intersects_aabb(center, BALL_RADIUS, &wall.to_aabb()));
    }
    assert!(world.ball().get_position().x < 200.0);

    let hit_wall = world.events().bounces().any(|surface| {
        surface
            == BounceSurface::Collider {
                index: 0,
                side: ContactSide::Left,
            }
    });
    assert!(hit_wall);
}

#[test]
fn test_collider_replacement() {
    let old_wall = ColliderRect::new(100.0, 140.0, 400.0, 600.0);
    let far_box = ColliderRect::new(1000.0, 1100.0, 0.0, 100.0);

    // With the wall in place the ball is stopped in front of it
    let mut blocked = floor_world(Vector2::new(0.0, 582.0), vec![old_wall]);
    blocked.set_velocity(10.0, 0.0);
    for _ in 0..30 {
        blocked.update(1.0);
    }
    assert!(blocked.ball().get_position().x < 100.0);

    // After replacement only the new list is consulted
    let mut world = floor_world(Vector2::new(0.0, 582.0), vec![old_wall]);
    world.set_colliders(vec![far_box]);
    assert_eq!(world.colliders(), &[far_box]);
    world.set_velocity(10.0, 0.0);
    for _ in 0..30 {
        world.update(1.0);
    }
    assert!(world.ball().get_position().x > 200.0);
}

#[test]
fn test_add_block_validation() {
    let mut world = floor_world(Vector2::new(0.0, 582.0), Vec::new());

    let block = world
        .add_block(BlockDesc::new("crate", Vector2::new(500.0, 100.0), 40.0, 40.0, 4.0).with_label("rust"))
        .unwrap();
    assert_eq!(block.get_label(), Some("rust"));
    assert_eq!(block.get_velocity(), Vector2::zero());

    let duplicate = world.add_block(BlockDesc::new("crate", Vector2::zero(), 40.0, 40.0, 4.0));
    assert_eq!(duplicate.unwrap_err(), PhysicsError::DuplicateBody("crate".to_string()));

    let ball_id = world.add_block(BlockDesc::new("ball", Vector2::zero(), 40.0, 40.0, 4.0));
    assert!(matches!(ball_id, Err(PhysicsError::DuplicateBody(_))));

    let massless = world.add_block(BlockDesc::new("feather", Vector2::zero(), 40.0, 40.0, 0.0));
    assert!(matches!(massless, Err(PhysicsError::InvalidParameter(_))));

    let flat = world.add_block(BlockDesc::new("flat", Vector2::zero(), 40.0, f32::NAN, 4.0));
    assert!(matches!(flat, Err(PhysicsError::InvalidParameter(_))));

    assert_eq!(world.blocks().len(), 1);
    assert!(world.block("crate").is_ok());
    assert!(matches!(world.block("missing"), Err(PhysicsError::ResourceNotFound(_))));
}

#[test]
fn test_resting_block_stays_put() {
    let mut world = floor_world(Vector2::new(0.0, 582.0), Vec::new());
    world
        .add_block(BlockDesc::new("crate", Vector2::new(500.0, 580.0), 40.0, 40.0, 4.0))
        .unwrap();

    for _ in 0..10 {
        world.update(1.0);
        let block = world.block("crate").unwrap();
        assert_eq!(block.get_position(), Vector2::new(500.0, 580.0));
        assert_eq!(block.get_velocity(), Vector2::zero());
    }
}

#[test]
fn test_falling_block_settles_on_floor() {
    let mut world = floor_world(Vector2::new(0.0, 582.0), Vec::new());
    world
        .add_block(BlockDesc::new("crate", Vector2::new(500.0, 100.0), 40.0, 40.0, 4.0))
        .unwrap();

    for _ in 0..300 {
        world.update(1.0);
    }

    let block = world.block("crate").unwrap();
    assert_eq!(block.get_position(), Vector2::new(500.0, 580.0));
    assert_eq!(block.get_velocity(), Vector2::zero());
}

#[test]
fn test_ball_bulldozes_blocks() {
    let mut world = floor_world(Vector2::new(100.0, 582.0), Vec::new());
    world
        .add_block(BlockDesc::new("crate-a", Vector2::new(200.0, 580.0), 40.0, 40.0, 4.0))
        .unwrap();
    world
        .add_block(BlockDesc::new("crate-b", Vector2::new(241.0, 580.0), 40.0, 40.0, 4.0))
        .unwrap();

    world.set_velocity(20.0, 0.0);
    for _ in 0..15 {
        world.update(1.0);
    }

    let first_hit = world.events().iter().find_map(|event| match event {
        WorldEvent::BlockHit { block, side } => Some((block.clone(), *side)),
        _ => None,
    });
    assert_eq!(first_hit, Some((BodyId::from("crate-a"), ContactSide::Left)));

    // The ball keeps going while the block it hit passes the push on
    assert!(world.ball().get_velocity().x > 0.0);
    assert!(world.block("crate-a").unwrap().get_position().x > 200.0);
    assert!(world.block("crate-b").unwrap().get_position().x > 242.0);
}

#[test]
fn test_world_height_moves_floor() {
    let mut world = floor_world(Vector2::new(0.0, 582.0), Vec::new());
    world.set_world_height(500.0).unwrap();

    world.update(1.0);

    assert_relative_eq!(world.ball().get_position().y, 482.0);
    assert_eq!(world.ball().get_velocity(), Vector2::zero());
}

#[test]
fn test_block_hit_flag_lasts_one_update() {
    let mut world = floor_world(Vector2::new(100.0, 582.0), Vec::new());
    world
        .add_block(BlockDesc::new("crate", Vector2::new(200.0, 580.0), 40.0, 40.0, 4.0))
        .unwrap();
    world.set_velocity(20.0, 0.0);

    let mut hit = false;
    for _ in 0..10 {
        world.update(1.0);
        if world.drain_events().any(|e| matches!(e, WorldEvent::BlockHit { .. })) {
            hit = true;
            break;
        }
    }
    assert!(hit, "the ball never reached the block");
    assert!(world.block("crate").unwrap().just_collided());

    // Nothing touches the block on the next update
    world.set_position(1500.0, 300.0);
    world.update(1.0);
    assert!(!world.block("crate").unwrap().just_collided());
}
