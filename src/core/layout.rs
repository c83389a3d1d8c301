use crate::core::{CameraFollower, WorldBounds};
use crate::math::Vector2;

/// Sections of the world, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Intro,
    About,
    Projects,
    Languages,
    Tools,
    Frameworks,
    Contact,
    Thanks,
}

impl SectionId {
    /// Every section in world order
    pub const ORDER: [SectionId; 8] = [
        SectionId::Intro,
        SectionId::About,
        SectionId::Projects,
        SectionId::Languages,
        SectionId::Tools,
        SectionId::Frameworks,
        SectionId::Contact,
        SectionId::Thanks,
    ];

    /// Skill sections sit closer to their successor
    pub fn is_compact(&self) -> bool {
        matches!(self, SectionId::Languages | SectionId::Tools)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Horizontal placement of the sections for a given viewport, and the world
/// geometry derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct WorldLayout {
    viewport_width: f32,
    viewport_height: f32,
    section_x: [f32; 8],
}

impl WorldLayout {
    /// Gap between regular sections, in viewport widths
    pub const SECTION_SPACING: f32 = 1.6;

    /// Gap after a compact section, in viewport widths
    pub const COMPACT_SECTION_SPACING: f32 = 0.5;

    /// Distance of the floor above the bottom of the viewport
    pub const FLOOR_OFFSET: f32 = 80.0;

    /// Room past the last section before the world ends
    pub const TRAILING_SPACE: f32 = 400.0;

    /// A jump lands this far left of the section and this far above the viewport bottom
    pub const JUMP_OFFSET: f32 = 100.0;

    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut section_x = [0.0; 8];
        let mut x = 0.0;
        for section in SectionId::ORDER {
            section_x[section.index()] = x;
            x += Self::spacing(section) * viewport_width;
        }

        Self {
            viewport_width,
            viewport_height,
            section_x,
        }
    }

    /// World x of a section's left edge
    pub fn section_x(&self, section: SectionId) -> f32 {
        self.section_x[section.index()]
    }

    /// Distance from a section's left edge to the next section
    pub fn section_width(&self, section: SectionId) -> f32 {
        Self::spacing(section) * self.viewport_width
    }

    /// x of the last section; the camera never scrolls past it
    pub fn camera_limit(&self) -> f32 {
        self.section_x(SectionId::Thanks)
    }

    pub fn viewport_center_x(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Rectangle the ball lives in
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(
            self.camera_limit() + Self::TRAILING_SPACE,
            self.viewport_height - Self::FLOOR_OFFSET,
            self.viewport_center_x(),
        )
    }

    /// Where the ball starts, on the floor at the world origin
    pub fn start_position(&self) -> Vector2 {
        Vector2::new(0.0, self.viewport_height - Self::FLOOR_OFFSET)
    }

    /// Where the ball is teleported to when jumping to a section
    pub fn jump_target(&self, section: SectionId) -> Vector2 {
        Vector2::new(
            self.section_x(section) - Self::JUMP_OFFSET,
            self.viewport_height - Self::JUMP_OFFSET,
        )
    }

    fn spacing(section: SectionId) -> f32 {
        if section.is_compact() {
            Self::COMPACT_SECTION_SPACING
        } else {
            Self::SECTION_SPACING
        }
    }

    /// A camera centred on the start, limited to the last section
    pub fn camera(&self, lerp_factor: f32) -> CameraFollower {
        CameraFollower::new(self.viewport_center_x(), lerp_factor, self.camera_limit())
    }
}
