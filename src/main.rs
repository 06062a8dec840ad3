//! Terminal 2048 runner (default binary).
//!
//! One loop drives everything: render when something changed, wait for a key
//! until the next tick, then advance the active animation by one frame.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_2048::config::GameConfig;
use tui_2048::engine::{App, InputOutcome};
use tui_2048::input::{direction_for_key, is_restart, should_quit};
use tui_2048::term::{FrameBuffer, GameView, HudView, TerminalRenderer, TileScene, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only: stdout belongs to the game while in raw mode.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut app = App::new(config.seed);
    let mut scene = TileScene::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    app.start(&mut scene);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let hud = hud_for(&app);
            view.render_into(&scene, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(actions = app.game().action_count(), "quit");
                        return Ok(());
                    }
                    if is_restart(key) {
                        app.restart(&mut scene);
                        dirty = true;
                    } else if let Some(direction) = direction_for_key(key) {
                        match app.handle_input(direction, &mut scene) {
                            InputOutcome::Ignored => {}
                            InputOutcome::Accepted => dirty = true,
                            InputOutcome::GameOver => {
                                info!("no more moves");
                                dirty = true;
                            }
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if app.is_animating() {
                app.tick(&mut scene);
                dirty = true;
            }
        }
    }
}

fn hud_for(app: &App) -> HudView {
    HudView {
        moves: app.game().action_count(),
        best: app
            .game()
            .board()
            .tiles()
            .map(|(_, v)| v)
            .max()
            .unwrap_or(0),
        game_over: app.is_game_over(),
    }
}
