// snowsim - Terminal preview of the snowfall field
//
// Runs the same simulation the site ships, scaled to the terminal cell
// grid. Useful for eyeballing density and drift without a browser build.
//
// Usage: cargo run --bin snowsim -- [--fps N]

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use snow_engine::{QUAD_STRIDE, SnowWorld};

// A terminal cell stands in for roughly this many viewport pixels.
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 20.0;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut fps = 30u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fps" => {
                fps = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(30);
                i += 2;
            }
            _ => i += 1,
        }
    }

    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut out, fps.max(1));

    execute!(out, LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, fps: u64) -> io::Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    let mut world = SnowWorld::with_seed(
        f32::from(cols) * CELL_W,
        f32::from(rows) * CELL_H,
        rand::random(),
    );

    let frame = Duration::from_millis(1000 / fps);
    loop {
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) =>
                {
                    return Ok(());
                }
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    world.reset(f32::from(cols) * CELL_W, f32::from(rows) * CELL_H);
                }
                _ => {}
            }
        }

        world.tick();

        queue!(out, Clear(ClearType::All))?;
        for quad in world.output().chunks_exact(QUAD_STRIDE) {
            let col = (quad[0] / CELL_W) as i32;
            let row = (quad[1] / CELL_H) as i32;
            if col < 0 || col >= i32::from(cols) || row < 0 || row >= i32::from(rows) {
                continue;
            }
            // Big flakes read as stars, small ones as dust.
            let glyph = if quad[2] >= 7.0 { '*' } else { '.' };
            queue!(out, cursor::MoveTo(col as u16, row as u16), Print(glyph))?;
        }
        out.flush()?;
    }
}
