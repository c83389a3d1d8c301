use crate::core::WorldEvent;

/// Volume envelope for impact sounds.
///
/// Each bounce plays at the current volume and quietens the next one; a new
/// launch restores full volume. Volumes that decay to the cutoff go silent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactVolume {
    volume: f32,
    damper: f32,
    cutoff: f32,
}

impl Default for ImpactVolume {
    fn default() -> Self {
        Self::new(0.7, 0.1)
    }
}

impl ImpactVolume {
    pub fn new(damper: f32, cutoff: f32) -> Self {
        Self {
            volume: 1.0,
            damper,
            cutoff,
        }
    }

    /// Feeds one world event. Returns the volume to play at for a bounce.
    pub fn observe(&mut self, event: &WorldEvent) -> Option<f32> {
        match event {
            WorldEvent::Launched { .. } => {
                self.volume = 1.0;
                None
            }
            WorldEvent::Bounce { .. } => {
                let played = self.volume;
                self.volume *= self.damper;
                if self.volume <= self.cutoff {
                    self.volume = 0.0;
                }
                Some(played)
            }
            WorldEvent::BlockHit { .. } => None,
        }
    }

    /// Volume the next bounce will play at
    pub fn current(&self) -> f32 {
        self.volume
    }
}
