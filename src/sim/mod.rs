// sim/ - Snowfall simulation
//
// The field is sized from the viewport area and reseeded wholesale on
// resize. One tick = advance, encode, recycle, so a flake that just left
// the bounds is still drawn once at its exit position.

mod flake;

pub use flake::Flakes;

use crate::render::Encoder;

/// Viewport pixels per flake.
const DENSITY: f32 = 10_000.0;

const DEFAULT_SEED: u32 = 0xDEADBEEF;

/// Snowfall world
pub struct SnowWorld {
    w: f32,
    h: f32,
    flakes: Flakes,
    encoder: Encoder,
    rng: u32,
    running: bool,
}

impl SnowWorld {
    pub fn new(w: f32, h: f32) -> Self {
        Self::with_seed(w, h, DEFAULT_SEED)
    }

    pub fn with_seed(w: f32, h: f32, seed: u32) -> Self {
        let mut world = Self {
            w,
            h,
            flakes: Flakes::new(),
            encoder: Encoder::new(),
            // xorshift must not start at zero
            rng: if seed == 0 { DEFAULT_SEED } else { seed },
            running: true,
        };
        world.reset(w, h);
        world
    }

    /// Field population for a viewport: one flake per `DENSITY` square
    /// pixels, rounded up.
    pub fn population(w: f32, h: f32) -> usize {
        ((w * h) / DENSITY).ceil() as usize
    }

    /// Record a new viewport and reseed the whole field.
    pub fn reset(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
        let count = Self::population(w, h);
        self.flakes.reseed(count, w, h, &mut self.rng);
    }

    /// One frame. Returns whether the caller should schedule another; a
    /// `stop()` landing between frames still lets the in-flight frame
    /// advance and encode, so the shell may draw one extra frame.
    pub fn tick(&mut self) -> bool {
        self.flakes.advance();
        self.encoder.encode_flakes(&self.flakes);
        self.flakes.recycle(self.w, self.h, &mut self.rng);
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    // xorshift32, uniform in [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    // Accessors for the facade and tools
    pub fn output(&self) -> &[f32] {
        self.encoder.output()
    }
    pub fn output_ptr(&self) -> *const f32 {
        self.encoder.ptr()
    }
    pub fn output_len(&self) -> usize {
        self.encoder.len()
    }
    pub fn flakes(&self) -> &Flakes {
        &self.flakes
    }
    pub fn flake_count(&self) -> usize {
        self.flakes.len()
    }
    pub fn width(&self) -> f32 {
        self.w
    }
    pub fn height(&self) -> f32 {
        self.h
    }
}
