use crate::bodies::{BlockDesc, BodyId};
use crate::core::PhysicsWorld;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;
use rand::Rng;
use std::collections::HashSet;

/// A column of labelled blocks that drops into the world once, the first time
/// the ball comes close to its section.
///
/// Blocks are laid out two per row, left and right of the centre, starting
/// above the top of the screen so they fall in.
#[derive(Debug, Clone)]
pub struct BlockColumn {
    prefix: String,
    center_x: f32,
    /// End of the span over which the section is fully visible
    right_edge: f32,
    labels: Vec<String>,
    spawned: bool,
}

impl BlockColumn {
    /// Horizontal distance of each column from the centre
    pub const COLUMN_OFFSET: f32 = 50.0;

    /// y of the first row
    pub const FIRST_ROW_Y: f32 = -200.0;

    pub const ROW_SPACING: f32 = 100.0;

    /// Smallest block side; each side adds up to `SIZE_JITTER`
    pub const MIN_SIZE: f32 = 70.0;

    pub const SIZE_JITTER: f32 = 20.0;

    pub const BLOCK_MASS: f32 = 4.0;

    /// Distance over which a section fades in as the ball approaches
    pub const FADE_RADIUS: f32 = 1500.0;

    /// Part of a section's width, at its right end, that is outside the visible span
    pub const RIGHT_INSET: f32 = 600.0;

    pub fn new<S: Into<String>>(
        prefix: impl Into<String>,
        center_x: f32,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            center_x,
            right_edge: center_x,
            labels: labels.into_iter().map(Into::into).collect(),
            spawned: false,
        }
    }

    /// Stretches the fully visible span over a section `width` wide, so it
    /// runs from the column centre to `RIGHT_INSET` short of the section end
    pub fn with_section_width(mut self, width: f32) -> Self {
        self.right_edge = self.center_x + (width - Self::RIGHT_INSET).max(0.0);
        self
    }

    pub fn has_spawned(&self) -> bool {
        self.spawned
    }

    /// How visible the section is from `ball_x`, from 0 (far) to 1 (inside
    /// the visible span)
    pub fn visibility(&self, ball_x: f32) -> f32 {
        let distance = if ball_x < self.center_x {
            self.center_x - ball_x
        } else if ball_x > self.right_edge {
            ball_x - self.right_edge
        } else {
            0.0
        };
        (1.0 - distance / Self::FADE_RADIUS).max(0.0)
    }

    /// Block descriptions for this column, sizes drawn from `rng`
    pub fn block_descs<R: Rng>(&self, rng: &mut R) -> Vec<BlockDesc> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let offset = if index % 2 == 0 {
                    -Self::COLUMN_OFFSET
                } else {
                    Self::COLUMN_OFFSET
                };
                let row = (index / 2) as f32;
                let position = Vector2::new(
                    self.center_x + offset,
                    Self::FIRST_ROW_Y - row * Self::ROW_SPACING,
                );
                let width = Self::MIN_SIZE + rng.gen::<f32>() * Self::SIZE_JITTER;
                let height = Self::MIN_SIZE + rng.gen::<f32>() * Self::SIZE_JITTER;

                BlockDesc::new(
                    BodyId::new(format!("{}-{}", self.prefix, label)),
                    position,
                    width,
                    height,
                    Self::BLOCK_MASS,
                )
                .with_label(label.clone())
            })
            .collect()
    }

    /// Adds the column's blocks to `world`. Does nothing once spawned.
    /// Returns how many blocks were added.
    ///
    /// Either every block is added or none is: ids taken in the world or
    /// repeated within the column are rejected before anything is spawned.
    pub fn spawn<R: Rng>(&mut self, world: &mut PhysicsWorld, rng: &mut R) -> Result<usize> {
        if self.spawned {
            return Ok(0);
        }

        let descs = self.block_descs(rng);
        let mut ids = HashSet::with_capacity(descs.len());
        for desc in &descs {
            if !ids.insert(&desc.id) || world.block(desc.id.as_str()).is_ok() {
                return Err(PhysicsError::DuplicateBody(desc.id.to_string()));
            }
        }

        let count = descs.len();
        for desc in descs {
            world.add_block(desc)?;
        }
        self.spawned = true;

        log::debug!("column {} spawned {} blocks", self.prefix, count);
        Ok(count)
    }

    /// Spawns once the section is more than half visible from the ball
    pub fn spawn_when_visible<R: Rng>(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut R,
    ) -> Result<usize> {
        if self.visibility(world.ball().get_position().x) > 0.5 {
            self.spawn(world, rng)
        } else {
            Ok(0)
        }
    }
}
