// flake.rs - Falling snow flakes
//
// Structure-of-Arrays layout for cache-friendly iteration. The whole field
// is reseeded when the viewport changes; a flake that leaves the bounds is
// recycled in place instead of being dropped.

use super::SnowWorld;

// Field constants
const SIZE_MIN: f32 = 5.0;
const SIZE_SPREAD: f32 = 4.0;
const FALL_MIN: f32 = 2.0; // units per frame
const DRIFT_SPREAD: f32 = 5.0; // vx in [-2.5, 2.5)
const SIDE_SLACK: f32 = 5.0; // recycle once this far past a side edge
const RESPAWN_Y: f32 = -10.0;
const SPIN_SPREAD: f32 = 0.2;

pub struct Flakes {
    // Position
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Square quads, width == height
    pub size: Vec<f32>,

    // Velocity
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,

    // TODO: feed spin into the encoder once the shell draws tumbling quads
    pub spin: Vec<f32>,
}

impl Flakes {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            size: Vec::new(),
            vx: Vec::new(),
            vy: Vec::new(),
            spin: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Discard the field and repopulate `count` flakes over a `w` x `h`
    /// viewport.
    pub fn reseed(&mut self, count: usize, w: f32, h: f32, rng: &mut u32) {
        self.x.clear();
        self.y.clear();
        self.size.clear();
        self.vx.clear();
        self.vy.clear();
        self.spin.clear();
        self.x.reserve(count);
        self.y.reserve(count);
        self.size.reserve(count);
        self.vx.reserve(count);
        self.vy.reserve(count);
        self.spin.reserve(count);

        for _ in 0..count {
            self.x.push(SnowWorld::rand(rng) * w);
            self.y.push(SnowWorld::rand(rng) * h);
            self.size.push(SIZE_MIN + SnowWorld::rand(rng) * SIZE_SPREAD);
            self.vy.push(FALL_MIN + SnowWorld::rand(rng));
            self.vx
                .push(SnowWorld::rand(rng) * DRIFT_SPREAD - DRIFT_SPREAD / 2.0);
            self.spin
                .push(SnowWorld::rand(rng) * SPIN_SPREAD - SPIN_SPREAD / 2.0);
        }
    }

    /// Advance every flake by one frame of its velocity.
    pub fn advance(&mut self) {
        for i in 0..self.len() {
            self.x[i] += self.vx[i];
            self.y[i] += self.vy[i];
        }
    }

    /// Re-home flakes that left the bounds: fresh random x at the respawn
    /// line, velocity carried over.
    pub fn recycle(&mut self, w: f32, h: f32, rng: &mut u32) {
        for i in 0..self.len() {
            if self.x[i] > w + SIDE_SLACK || self.x[i] < -SIDE_SLACK || self.y[i] > h {
                self.x[i] = SnowWorld::rand(rng) * w;
                self.y[i] = RESPAWN_Y;
            }
        }
    }
}
