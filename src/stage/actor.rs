// actor.rs - Player sprite state
//
// Four facing directions, each with a 4-frame walk cycle. One shared
// counter picks the frame no matter which direction was pressed, so the
// cycle keeps advancing while turning in place.

use crate::world::{Edge, Rect, inside_edge};

/// Pixels per step.
const STEP: f32 = 15.0;
/// Frames per walk cycle.
const CYCLE: u8 = 4;

/// Sprite orientation; `Forward` faces the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Forward = 0,
    Back = 1,
    Left = 2,
    Right = 3,
}

pub struct Actor {
    // Resting box, measured by the shell
    home: Rect,
    offset_x: f32,
    facing: Facing,
    frame: u8,
    cycle: u8,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            home: Rect::sized(0.0, 0.0, 0.0, 0.0),
            offset_x: 0.0,
            facing: Facing::Forward,
            frame: 0,
            cycle: 0,
        }
    }

    pub fn set_home(&mut self, home: Rect) {
        self.home = home;
    }

    /// Current box: the home box shifted by the accumulated offset.
    pub fn hitbox(&self) -> Rect {
        self.home.shifted_x(self.offset_x)
    }

    /// Turn toward `facing` and advance the shared walk counter. The frame
    /// that roots is the counter's value at press time.
    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
        self.frame = self.cycle % CYCLE;
        self.cycle = (self.cycle + 1) % CYCLE;
    }

    /// Step left if the pre-move box still clears the area's left edge.
    /// The step itself can land up to `STEP` past it.
    pub fn step_left(&mut self, area: &Rect) {
        if inside_edge(&self.hitbox(), area, Edge::Left) {
            self.offset_x -= STEP;
        }
    }

    /// Step right, gated the same way against the right edge.
    pub fn step_right(&mut self, area: &Rect) {
        if inside_edge(&self.hitbox(), area, Edge::Right) {
            self.offset_x += STEP;
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Rooted frame within the facing direction's cycle.
    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }
}
