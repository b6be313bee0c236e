// stage/ - Scene and input control
//
// Owns everything the shell renders: which panel is up, the actor, the
// vending mini-game, the speech script, and the score. Key events land
// here in the shell's listener order: movement, charge, collection,
// speech. Listeners stay live on both panels.

mod actor;
mod script;
mod vending;

pub use actor::{Actor, Facing};
pub use script::{LINES, Script};
pub use vending::Vending;

use crate::world::{Rect, overlaps};

/// The two top-level panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Hero = 0,
    Game = 1,
}

/// Keyboard input after DOM-name mapping. Non-arrow keys still take part
/// in collection and the speech trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl Key {
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ => Key::Other,
        }
    }

    /// Facing for the arrow keys; ArrowUp walks away from the camera.
    pub fn facing(self) -> Option<Facing> {
        match self {
            Key::Up => Some(Facing::Back),
            Key::Down => Some(Facing::Forward),
            Key::Left => Some(Facing::Left),
            Key::Right => Some(Facing::Right),
            Key::Other => None,
        }
    }
}

pub struct Stage {
    scene: Scene,
    // Playable bounds, measured by the shell
    area: Rect,
    actor: Actor,
    vending: Vending,
    script: Script,
    score: u32,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            scene: Scene::Hero,
            area: Rect::sized(0.0, 0.0, 0.0, 0.0),
            actor: Actor::new(),
            vending: Vending::new(),
            script: Script::new(),
            score: 0,
        }
    }

    // Layout push-down from the shell's DOM measurements.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }
    pub fn set_actor_home(&mut self, home: Rect) {
        self.actor.set_home(home);
    }
    pub fn set_vending(&mut self, rect: Rect) {
        self.vending.set_rect(rect);
    }
    pub fn set_star(&mut self, rect: Rect) {
        self.vending.set_star(rect);
    }

    /// Primary click on the hero panel.
    pub fn advance(&mut self) {
        self.scene = Scene::Game;
    }

    /// Reset click: back to the hero panel with all progress wiped. The
    /// actor keeps its position and facing.
    pub fn reset(&mut self) {
        self.scene = Scene::Hero;
        self.score = 0;
        self.vending.reset();
        self.script.reset();
    }

    pub fn key_down(&mut self, key: Key, now_ms: f64) {
        if let Some(facing) = key.facing() {
            self.actor.face(facing);
            match key {
                Key::Left => self.actor.step_left(&self.area),
                Key::Right => self.actor.step_right(&self.area),
                _ => {}
            }
        }

        let hitbox = self.actor.hitbox();

        if key == Key::Up {
            self.vending.begin_charge(&hitbox, now_ms);
        }

        if self.vending.try_collect(&hitbox) {
            self.score += 1;
        }

        if self.score == 0 && overlaps(self.vending.rect(), &hitbox) {
            // No-op once the script has played.
            self.script.start(now_ms);
        }
    }

    pub fn key_up(&mut self, key: Key, now_ms: f64) {
        if key == Key::Up {
            self.vending.end_charge(&self.actor.hitbox(), now_ms);
        }
    }

    /// Per-frame tick; drives speech playback.
    pub fn tick(&mut self, now_ms: f64) {
        self.script.step(now_ms);
    }

    // Render state for the shell.
    pub fn scene(&self) -> Scene {
        self.scene
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn actor(&self) -> &Actor {
        &self.actor
    }
    pub fn vending(&self) -> &Vending {
        &self.vending
    }
    pub fn script(&self) -> &Script {
        &self.script
    }
}
