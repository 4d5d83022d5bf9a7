//! Terminal VerseMatch runner (default binary).
//!
//! Fixed-timestep loop: render, poll input with a timeout until the next
//! tick, then advance time. Mouse capture is enabled for the whole
//! session; the drag gesture needs press, move, and release events.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use versematch::app::App;
use versematch::profile::ProfileStore;
use versematch::term::{TerminalRenderer, Viewport};
use versematch::types::TICK_MS;

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = ProfileStore::open(ProfileStore::default_path());
    let mut app = App::new(store);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let screen = app.render(viewport);
        term.draw(&screen)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, viewport)?;
                }
                Event::FocusLost => {
                    app.handle_focus_lost();
                }
                Event::Resize(..) => {
                    // Geometry is recomputed every frame; nothing to do.
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();
            app.tick(elapsed);
        }
    }
}
