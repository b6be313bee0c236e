//! snow-engine - interactive core of the pixel vignette site
//!
//! Compiled to WebAssembly. The JS shell forwards keyboard, click, and
//! resize events in and reads render state back out each frame; all
//! simulation and game state lives on this side of the boundary.

mod render;
mod sim;
mod stage;
mod world;

pub use render::{FLAKE_FILL, QUAD_STRIDE};
pub use sim::{Flakes, SnowWorld};
pub use stage::{Actor, Facing, Key, LINES, Scene, Script, Stage, Vending};
pub use world::{Edge, Rect, inside_edge, overlaps};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Snow overlay handle. The shell drives it from requestAnimationFrame:
///
/// ```js
/// const field = new SnowField(innerWidth, innerHeight);
/// (function frame() { if (field.tick()) requestAnimationFrame(frame); })();
/// addEventListener("resize", () => field.resize(innerWidth, innerHeight));
/// ```
#[wasm_bindgen]
pub struct SnowField {
    world: SnowWorld,
}

#[wasm_bindgen]
impl SnowField {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> SnowField {
        SnowField {
            world: SnowWorld::new(width, height),
        }
    }

    /// Reseed the field for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.reset(width, height);
    }

    /// Advance and repack one frame; false means do not reschedule.
    pub fn tick(&mut self) -> bool {
        self.world.tick()
    }

    /// Stop the loop. A frame already in flight still renders once.
    pub fn stop(&mut self) {
        self.world.stop();
    }

    pub fn output_ptr(&self) -> *const f32 {
        self.world.output_ptr()
    }

    pub fn output_len(&self) -> usize {
        self.world.output_len()
    }

    pub fn flake_count(&self) -> usize {
        self.world.flake_count()
    }

    /// Floats per packed flake: x, y, size.
    pub fn stride() -> usize {
        QUAD_STRIDE
    }

    /// Canvas fillStyle shared by every flake.
    pub fn fill_style() -> String {
        FLAKE_FILL.to_string()
    }
}

/// Two-scene stage handle. Keys arrive by DOM name; timestamps come from
/// `Date.now()` on this side of the boundary so the shell only forwards
/// events.
#[wasm_bindgen]
pub struct GameStage {
    stage: Stage,
}

#[wasm_bindgen]
impl GameStage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameStage {
        GameStage {
            stage: Stage::new(),
        }
    }

    // Layout push-down; boxes come from getBoundingClientRect().
    pub fn set_area(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.stage.set_area(Rect::sized(left, top, width, height));
    }

    pub fn set_actor_home(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.stage.set_actor_home(Rect::sized(left, top, width, height));
    }

    pub fn set_vending(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.stage.set_vending(Rect::sized(left, top, width, height));
    }

    pub fn set_star(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.stage.set_star(Rect::sized(left, top, width, height));
    }

    /// Primary click on the hero panel.
    pub fn advance(&mut self) {
        self.stage.advance();
    }

    /// Reset click.
    pub fn reset(&mut self) {
        self.stage.reset();
    }

    pub fn key_down(&mut self, key: &str) {
        self.stage.key_down(Key::from_dom(key), js_sys::Date::now());
    }

    pub fn key_up(&mut self, key: &str) {
        self.stage.key_up(Key::from_dom(key), js_sys::Date::now());
    }

    /// Per-frame tick; drives speech playback.
    pub fn tick(&mut self) {
        self.stage.tick(js_sys::Date::now());
    }

    // Render state.

    /// 0 hero, 1 game.
    pub fn scene(&self) -> u32 {
        self.stage.scene() as u32
    }

    /// 0 forward, 1 back, 2 left, 3 right.
    pub fn facing(&self) -> u32 {
        self.stage.actor().facing() as u32
    }

    /// Rooted frame within the facing direction's 4-frame cycle.
    pub fn frame(&self) -> u32 {
        self.stage.actor().frame() as u32
    }

    /// Horizontal offset from the actor's resting position, px.
    pub fn actor_x(&self) -> f32 {
        self.stage.actor().offset_x()
    }

    pub fn score(&self) -> u32 {
        self.stage.score()
    }

    pub fn star_visible(&self) -> bool {
        self.stage.vending().star_out()
    }

    pub fn vending_idle(&self) -> bool {
        self.stage.vending().idle()
    }

    pub fn bubble_visible(&self) -> bool {
        self.stage.script().bubble()
    }

    pub fn speech_text(&self) -> String {
        self.stage.script().text().to_string()
    }
}
