use crate::bodies::BodyId;
use crate::collision::{BounceSurface, ContactSide};
use crate::math::Vector2;
use std::collections::VecDeque;

/// Something observable that happened in the world
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// The ball was given a new launch velocity
    Launched {
        velocity: Vector2,
    },

    /// The launched ball bounced off a world edge or a collider rectangle.
    /// Not emitted while the ball sits at rest against a surface.
    Bounce {
        surface: BounceSurface,
    },

    /// The ball struck a block
    BlockHit {
        block: BodyId,
        side: ContactSide,
    },
}

impl WorldEvent {
    /// Whether this event is a bounce of the ball off a static surface
    pub fn is_bounce(&self) -> bool {
        matches!(self, Self::Bounce { .. })
    }
}

/// A queue of world events, filled by the simulation and drained by the caller
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<WorldEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the back of the queue
    pub fn push(&mut self, event: WorldEvent) {
        self.events.push_back(event);
    }

    /// Removes and yields every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = WorldEvent> + '_ {
        self.events.drain(..)
    }

    /// Iterates over queued events without removing them
    pub fn iter(&self) -> impl Iterator<Item = &WorldEvent> {
        self.events.iter()
    }

    /// Queued bounce surfaces, oldest first
    pub fn bounces(&self) -> impl Iterator<Item = BounceSurface> + '_ {
        self.events.iter().filter_map(|event| match event {
            WorldEvent::Bounce { surface } => Some(*surface),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
