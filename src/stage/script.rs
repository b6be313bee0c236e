// script.rs - Scripted speech playback
//
// Character-by-character reveal driven by the per-frame tick. A started
// script runs to the end; proximity or score changing mid-run does not
// stop it. Only a stage reset reinitializes the state.

/// Per-character reveal delay, ms.
const CHAR_MS: f64 = 30.0;
/// Pause on a finished line before it is cleared, ms.
const HOLD_MS: f64 = 1200.0;

/// The vending-machine encounter, in order.
pub const LINES: [&str; 2] = [
    "Why is this vending machine moving???",
    "AND WHY IS THERE A CAT INSIDEE!!!",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    // Revealing `line`; `at` is the byte cursor into it
    Typing { line: usize, at: usize },
    // Finished line held on screen before clearing
    Holding { line: usize },
}

pub struct Script {
    text: String,
    bubble: bool,
    played: bool,
    phase: Phase,
    // When the next step may run
    due: f64,
}

impl Script {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            bubble: false,
            played: false,
            phase: Phase::Idle,
            due: 0.0,
        }
    }

    /// Begin playback unless it already ran. The played flag is set before
    /// the first character, so a key-repeat burst cannot start two runs.
    pub fn start(&mut self, now_ms: f64) {
        if self.played {
            return;
        }
        self.played = true;
        self.bubble = true;
        self.phase = Phase::Typing { line: 0, at: 0 };
        self.due = now_ms;
        self.step(now_ms);
    }

    /// Advance playback up to `now_ms`. Reveals at most one character per
    /// call, like the chain of per-character timers it stands in for.
    pub fn step(&mut self, now_ms: f64) {
        loop {
            if now_ms < self.due {
                return;
            }
            match self.phase {
                Phase::Idle => return,
                Phase::Typing { line, at } => {
                    let src = LINES[line];
                    match src[at..].chars().next() {
                        Some(c) => {
                            self.text.push(c);
                            self.phase = Phase::Typing {
                                line,
                                at: at + c.len_utf8(),
                            };
                            self.due = now_ms + CHAR_MS;
                        }
                        None => {
                            self.phase = Phase::Holding { line };
                            self.due = now_ms + HOLD_MS;
                        }
                    }
                    return;
                }
                Phase::Holding { line } => {
                    self.text.clear();
                    if line + 1 < LINES.len() {
                        // The next line's first character is due right away.
                        self.phase = Phase::Typing {
                            line: line + 1,
                            at: 0,
                        };
                    } else {
                        self.bubble = false;
                        self.phase = Phase::Idle;
                        return;
                    }
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.bubble = false;
        self.played = false;
        self.phase = Phase::Idle;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bubble(&self) -> bool {
        self.bubble
    }

    pub fn played(&self) -> bool {
        self.played
    }

    pub fn idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the script like the frame loop does, in `step_ms` increments.
    fn run_until(script: &mut Script, from_ms: f64, to_ms: f64, step_ms: f64) {
        let mut t = from_ms;
        while t <= to_ms {
            script.step(t);
            t += step_ms;
        }
    }

    #[test]
    fn first_character_appears_on_start() {
        let mut s = Script::new();
        s.start(0.0);
        assert!(s.bubble());
        assert!(s.played());
        assert_eq!(s.text(), "W");
    }

    #[test]
    fn characters_reveal_on_the_30ms_grid() {
        let mut s = Script::new();
        s.start(0.0);

        s.step(15.0);
        assert_eq!(s.text(), "W");
        s.step(30.0);
        assert_eq!(s.text(), "Wh");
        s.step(60.0);
        assert_eq!(s.text(), "Why");
    }

    #[test]
    fn full_run_types_both_lines_then_hides_the_bubble() {
        let mut s = Script::new();
        s.start(0.0);

        // Somewhere in the middle of line one.
        run_until(&mut s, 5.0, 600.0, 5.0);
        assert!(s.bubble());
        assert!(LINES[0].starts_with(s.text()));
        assert!(!s.text().is_empty());

        // Line one done and held, line two typing.
        run_until(&mut s, 605.0, 3000.0, 5.0);
        assert!(LINES[1].starts_with(s.text()));

        // Sequence over: text cleared, bubble down, flag still set.
        run_until(&mut s, 3005.0, 10_000.0, 5.0);
        assert!(s.idle());
        assert!(!s.bubble());
        assert_eq!(s.text(), "");
        assert!(s.played());
    }

    #[test]
    fn a_second_start_is_ignored_until_reset() {
        let mut s = Script::new();
        s.start(0.0);
        run_until(&mut s, 5.0, 10_000.0, 5.0);

        s.start(20_000.0);
        assert!(s.idle());
        assert_eq!(s.text(), "");

        s.reset();
        assert!(!s.played());
        s.start(30_000.0);
        assert_eq!(s.text(), "W");
    }
}
