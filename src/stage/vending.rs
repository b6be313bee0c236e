// vending.rs - Vending machine mini-game
//
// Holding ArrowUp next to the machine long enough dispenses the star; any
// later keypress while standing on the star collects it.

use crate::world::{Rect, overlaps};

/// Minimum ArrowUp hold to dispense, ms.
const CHARGE_MS: f64 = 2000.0;

pub struct Vending {
    rect: Rect,
    star: Rect,
    star_out: bool,
    // The machine wobbles until it dispenses
    idle: bool,
    hold_since: Option<f64>,
}

impl Vending {
    pub fn new() -> Self {
        Self {
            rect: Rect::sized(0.0, 0.0, 0.0, 0.0),
            star: Rect::sized(0.0, 0.0, 0.0, 0.0),
            star_out: false,
            idle: true,
            hold_since: None,
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn set_star(&mut self, star: Rect) {
        self.star = star;
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Keydown half of the charge gesture. Key auto-repeat lands here again
    /// while held; an in-progress hold gates re-entry.
    pub fn begin_charge(&mut self, actor: &Rect, now_ms: f64) {
        if overlaps(&self.rect, actor) && self.hold_since.is_none() {
            self.hold_since = Some(now_ms);
        }
    }

    /// Keyup half. Only a release next to the machine settles the hold; a
    /// release elsewhere leaves the timestamp in place.
    pub fn end_charge(&mut self, actor: &Rect, now_ms: f64) {
        if !overlaps(&self.rect, actor) {
            return;
        }
        if let Some(start) = self.hold_since.take() {
            if now_ms - start >= CHARGE_MS {
                self.star_out = true;
                self.idle = false;
            }
        }
    }

    /// Take the star if it is out and under the actor. Visibility clears in
    /// the same dispatch as the point is reported.
    pub fn try_collect(&mut self, actor: &Rect) -> bool {
        if self.star_out && overlaps(&self.star, actor) {
            self.star_out = false;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.star_out = false;
        self.idle = true;
        self.hold_since = None;
    }

    pub fn star_out(&self) -> bool {
        self.star_out
    }

    pub fn idle(&self) -> bool {
        self.idle
    }

    pub fn charging(&self) -> bool {
        self.hold_since.is_some()
    }
}
