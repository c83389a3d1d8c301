use crate::bodies::{BlockDesc, Body, BodyFlags, BALL_ID};
use crate::collision::{
    ball_block_collision, block_collision, resolve_ball_block, resolve_ball_bounds,
    resolve_ball_colliders, resolve_block_block, resolve_block_floor, settle_ball, BounceSurface,
    ColliderRect,
};
use crate::core::{EventQueue, SimulationConfig, WorldBounds, WorldEvent};
use crate::error::PhysicsError;
use crate::integration::{LaunchState, SymplecticEulerIntegrator};
use crate::math::Vector2;
use crate::Result;

/// The simulation driver.
///
/// Owns the ball, the blocks and the collider rectangles. The caller drives it
/// one tick at a time with [`PhysicsWorld::update`], reads positions back, and
/// drains the [`WorldEvent`]s produced along the way.
#[derive(Debug)]
pub struct PhysicsWorld {
    /// The launched projectile
    ball: Body,

    /// Parabola the ball is currently following
    launch: LaunchState,

    /// Blocks in spawn order. Blocks are never removed.
    blocks: Vec<Body>,

    /// Static hitboxes, replaced wholesale by the layout layer
    colliders: Vec<ColliderRect>,

    bounds: WorldBounds,

    /// Configuration for the simulation
    config: SimulationConfig,

    integrator: SymplecticEulerIntegrator,

    /// Queue of world events, kept until drained
    events: EventQueue,

    /// Total simulated frame units
    time: f32,

    /// Reused buffer for the ball's static bounces within one tick
    bounce_scratch: Vec<BounceSurface>,
}

impl PhysicsWorld {
    /// Creates a world with the default configuration and the ball resting at `start`
    pub fn new(
        start: Vector2,
        ball_radius: f32,
        bounds: WorldBounds,
        colliders: Vec<ColliderRect>,
    ) -> Result<Self> {
        Self::with_config(start, ball_radius, bounds, colliders, SimulationConfig::default())
    }

    /// Creates a world with the given configuration
    pub fn with_config(
        start: Vector2,
        ball_radius: f32,
        bounds: WorldBounds,
        colliders: Vec<ColliderRect>,
        config: SimulationConfig,
    ) -> Result<Self> {
        config.validate()?;
        if !(ball_radius > 0.0) || !ball_radius.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball radius must be positive, got {ball_radius}"
            )));
        }
        validate_bounds(&bounds)?;

        log::debug!(
            "creating world {}x{} with ball r={} at {}",
            bounds.width,
            bounds.height,
            ball_radius,
            start
        );

        Ok(Self {
            ball: Body::new_ball(start, ball_radius, config.ball_mass),
            launch: LaunchState::at_rest(start),
            blocks: Vec::new(),
            colliders,
            bounds,
            config,
            integrator: SymplecticEulerIntegrator::new(),
            events: EventQueue::new(),
            time: 0.0,
            bounce_scratch: Vec::new(),
        })
    }

    /// Advances the simulation by `dt` frame units.
    ///
    /// Order within a tick: ball, blocks, ball against each block, then each
    /// unordered block pair in spawn order. A block hit by the ball can pass
    /// the hit on to its neighbours in the same tick.
    pub fn update(&mut self, dt: f32) {
        let dt = self.sanitize_delta(dt);

        self.update_ball(dt);
        self.update_blocks(dt);
        self.resolve_ball_blocks();
        self.resolve_block_pairs();

        self.time += dt;
    }

    /// Relaunches the ball from where it is with a new velocity
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        let velocity = Vector2::new(vx, vy);
        self.launch.relaunch(self.ball.position, velocity);
        self.ball.velocity = velocity;
        self.ball.flags.insert(BodyFlags::LAUNCHED);

        log::debug!("ball launched from {} with {}", self.ball.position, velocity);
        self.events.push(WorldEvent::Launched { velocity });
    }

    /// Teleports the ball and brings it to a full stop
    pub fn set_position(&mut self, x: f32, y: f32) {
        let position = Vector2::new(x, y);
        self.ball.position = position;
        self.ball.velocity = Vector2::zero();
        self.launch = LaunchState::at_rest(position);
        self.ball.flags.remove(BodyFlags::LAUNCHED);

        log::debug!("ball moved to {}", position);
    }

    /// Replaces the whole collider list. The next tick only sees `colliders`.
    pub fn set_colliders(&mut self, colliders: Vec<ColliderRect>) {
        log::debug!(
            "replacing {} colliders with {}",
            self.colliders.len(),
            colliders.len()
        );
        self.colliders = colliders;
    }

    /// Spawns a block at rest
    pub fn add_block(&mut self, desc: BlockDesc) -> Result<&Body> {
        let dimensions = [
            ("width", desc.width),
            ("height", desc.height),
            ("mass", desc.mass),
        ];
        for (name, value) in dimensions {
            if !(value > 0.0) || !value.is_finite() {
                return Err(PhysicsError::InvalidParameter(format!(
                    "block {} {name} must be positive, got {value}",
                    desc.id
                )));
            }
        }

        if desc.id.as_str() == BALL_ID || self.blocks.iter().any(|b| b.id == desc.id) {
            return Err(PhysicsError::DuplicateBody(desc.id.to_string()));
        }

        log::debug!(
            "spawning block {} ({}x{}, m={}) at {}",
            desc.id,
            desc.width,
            desc.height,
            desc.mass,
            desc.position
        );

        self.blocks.push(Body::new_block(desc));
        let index = self.blocks.len() - 1;
        Ok(&self.blocks[index])
    }

    /// Updates the world rectangle, e.g. after a viewport resize
    pub fn set_bounds(&mut self, bounds: WorldBounds) -> Result<()> {
        validate_bounds(&bounds)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Moves the floor, keeping the horizontal extent
    pub fn set_world_height(&mut self, height: f32) -> Result<()> {
        self.set_bounds(WorldBounds { height, ..self.bounds })
    }

    /// Replaces the configuration after validating it
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn ball(&self) -> &Body {
        &self.ball
    }

    pub fn blocks(&self) -> &[Body] {
        &self.blocks
    }

    /// Looks a block up by id
    pub fn block(&self, id: &str) -> Result<&Body> {
        self.blocks
            .iter()
            .find(|block| block.id.as_str() == id)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Block with id {id} not found")))
    }

    pub fn colliders(&self) -> &[ColliderRect] {
        &self.colliders
    }

    /// The parabola the ball is currently on
    pub fn launch_state(&self) -> &LaunchState {
        &self.launch
    }

    /// Whether the ball was launched and has not come to rest since
    pub fn is_launched(&self) -> bool {
        self.ball.flags.contains(BodyFlags::LAUNCHED)
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the total simulated time in frame units
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes and yields all queued events, oldest first
    pub fn drain_events(&mut self) -> impl Iterator<Item = WorldEvent> + '_ {
        self.events.drain()
    }

    fn sanitize_delta(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring invalid frame delta {dt}");
            return 0.0;
        }
        if dt > self.config.max_frame_delta {
            log::trace!("capping frame delta {} to {}", dt, self.config.max_frame_delta);
            return self.config.max_frame_delta;
        }
        dt
    }

    fn update_ball(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        self.launch.advance(dt);
        self.ball.position = self.launch.position(gravity);
        self.ball.velocity = self.launch.velocity_at(gravity);

        let mut hits = std::mem::take(&mut self.bounce_scratch);
        hits.clear();

        resolve_ball_bounds(&mut self.ball, &mut self.launch, &self.bounds, &self.config, &mut hits);
        self.emit_bounces(&hits);
        hits.clear();

        if settle_ball(&mut self.ball, &mut self.launch, &self.bounds, &self.config) {
            log::trace!("ball resting at {}", self.ball.position);
        }

        resolve_ball_colliders(&mut self.ball, &mut self.launch, &self.colliders, &self.config, &mut hits);
        self.emit_bounces(&hits);

        self.bounce_scratch = hits;
    }

    /// Queues bounce events, only while the ball is in flight
    fn emit_bounces(&mut self, hits: &[BounceSurface]) {
        if !self.is_launched() {
            return;
        }
        for &surface in hits {
            log::trace!("ball bounced off {:?}", surface);
            self.events.push(WorldEvent::Bounce { surface });
        }
    }

    fn update_blocks(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        for block in &mut self.blocks {
            self.integrator.integrate_vertical(block, gravity, dt);
            resolve_block_floor(block, &self.bounds, &self.config);
            self.integrator.integrate_horizontal(block, dt);
            block.flags.remove(BodyFlags::JUST_COLLIDED);
        }
    }

    fn resolve_ball_blocks(&mut self) {
        for block in &mut self.blocks {
            if !ball_block_collision(&self.ball, block) {
                continue;
            }
            if let Some(side) = resolve_ball_block(&mut self.ball, block, &self.config) {
                self.launch.relaunch(self.ball.position, self.ball.velocity);
                log::trace!("ball hit block {} on {:?}", block.id, side);
                self.events.push(WorldEvent::BlockHit {
                    block: block.id.clone(),
                    side,
                });
            }
        }
    }

    fn resolve_block_pairs(&mut self) {
        let count = self.blocks.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.blocks.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);
                if block_collision(a, b) {
                    resolve_block_block(a, b, &self.config);
                }
            }
        }
    }
}

fn validate_bounds(bounds: &WorldBounds) -> Result<()> {
    let finite = bounds.width.is_finite()
        && bounds.height.is_finite()
        && bounds.viewport_center_x.is_finite();
    if !finite || !(bounds.height > 0.0) {
        return Err(PhysicsError::InvalidParameter(format!(
            "world bounds must be finite with a positive height, got {:?}",
            bounds
        )));
    }
    Ok(())
}
