//! Terminal donut runner (default binary).
//!
//! Spins the torus at a fixed frame rate until `q`, `Esc` or Ctrl-C.
//! It uses crossterm for input and a diffing framebuffer renderer.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_donut::core::{log_path_from_env, Animation, DonutConfig};
use tui_donut::input::ActionBatch;
use tui_donut::term::{DonutView, FrameBuffer, FramePacer, TerminalRenderer, Viewport};
use tui_donut::types::DonutAction;

fn main() -> Result<()> {
    init_logging(log_path_from_env().as_deref())?;
    let config = DonutConfig::from_env();
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "render loop failed");
    }
    result
}

/// Stdout belongs to the animation, so logs only go to a file, and only
/// when one is configured.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &DonutConfig) -> Result<()> {
    let mut animation = Animation::new(config.render, config.speed);
    let view = DonutView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = FramePacer::new(config.frame_ms as u64);
    let mut actions = ActionBatch::new();
    let mut show_debug = config.debug;
    let clock = Instant::now();

    loop {
        // Input until the next frame slot.
        let wait = Duration::from_millis(pacer.wait_ms(clock.elapsed().as_millis() as u64));
        read_input(term, &mut actions, wait)?;

        // Quit is honoured before rendering so no partial frame is shown.
        if actions.quit_requested() {
            info!(
                frames = animation.frame_index(),
                last_frame = ?animation.stats(),
                "exit requested"
            );
            return Ok(());
        }
        for action in actions.iter() {
            apply_action(action, &mut animation, &mut show_debug);
        }
        actions.clear();

        if !pacer.frame_due(clock.elapsed().as_millis() as u64) {
            continue;
        }

        animation.step();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            animation.frame(),
            &animation.snapshot(),
            show_debug,
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;
    }
}

/// Block up to `timeout` for the first event, then drain whatever else is queued.
fn read_input(term: &mut TerminalRenderer, actions: &mut ActionBatch, timeout: Duration) -> Result<()> {
    let mut timeout = timeout;
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => {
                actions.push_key(key);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
        timeout = Duration::ZERO;
    }
    Ok(())
}

fn apply_action(action: DonutAction, animation: &mut Animation, show_debug: &mut bool) {
    debug!(action = action.as_str(), "applying action");
    match action {
        DonutAction::ToggleDebug => {
            *show_debug = !*show_debug;
            info!(enabled = *show_debug, "debug readout toggled");
        }
        DonutAction::SpeedUp => {
            let speed = animation.speed_up();
            info!(delta_a = speed.delta_a, delta_b = speed.delta_b, "speed up");
        }
        DonutAction::SpeedDown => {
            let speed = animation.speed_down();
            info!(delta_a = speed.delta_a, delta_b = speed.delta_b, "speed down");
        }
        // Handled by the loop before actions are applied.
        DonutAction::Quit => {}
    }
}
