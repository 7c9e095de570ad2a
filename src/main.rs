//! Terminal world viewer (default binary).
//!
//! Walks a player around a flat generated world. Arrow keys / WASD / hjkl move,
//! space stops, holding the left mouse button digs, `q` quits.
//!
//! Configuration comes from the environment, see [`RenderConfig::from_env`].

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};

use wordcraft::core::{GridWorld, Player, RenderConfig, World, WorldRenderer};
use wordcraft::input::{handle_key_event, should_quit, PointerTracker};
use wordcraft::term::{TermSurface, TerminalRenderer};
use wordcraft::types::{PixelScale, Vec2, TICK_MS};

fn main() -> Result<()> {
    let config = RenderConfig::from_env();
    init_logging(&config)?;
    info!("Starting with textures from {}", config.textures_dir.display());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("Exiting on error: {:#}", e);
    }
    result
}

/// Log to `config.log_path` when set; otherwise only errors reach stderr so
/// the alternate screen stays clean. `RUST_LOG` overrides the level.
fn init_logging(config: &RenderConfig) -> Result<()> {
    let mut builder = match &config.log_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        }
    };
    builder.try_init().context("initializing logger")?;
    Ok(())
}

/// Fold the motion since the last tick into the player and mark a new tick.
fn step(world: &mut GridWorld, player: &mut Player, now: Instant) {
    player.advance(now.saturating_duration_since(world.last_tick()).as_secs_f64());
    world.tick(now);
}

fn run(term: &mut TerminalRenderer, config: &RenderConfig) -> Result<()> {
    let mut renderer = WorldRenderer::from_config(config);
    let cs = config.cell_size as f32;
    let scale = PixelScale::new(cs / 2.0, cs);
    let mut surface = TermSurface::new(scale).with_ink_offset(config.pointer_y_offset);
    let mut pointer = PointerTracker::new(scale);

    let mut world = GridWorld::new(Instant::now());
    let mut player = Player::new(Vec2::new(0.0, 1.0));
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        surface.begin_frame(w, h);
        let now = Instant::now();
        let report = renderer.frame(&mut world, &player, pointer.state(), &mut surface, now);
        for pos in &report.removed {
            debug!("Dug block at {}", pos);
        }
        term.draw_swap(surface.framebuffer_mut())?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(world.last_tick().elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        // Velocity changes apply from now on, not from the last tick.
                        step(&mut world, &mut player, Instant::now());
                        player.apply_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    debug!("Terminal resized to {}x{}", w, h);
                    term.invalidate();
                }
                other => {
                    pointer.handle_event(&other);
                }
            }
        }

        // Tick.
        if world.last_tick().elapsed() >= tick_duration {
            step(&mut world, &mut player, Instant::now());
        }
    }
}
