mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sideways::compute::{init_state, tick};
use sideways::config::{GameConfig, DEFAULT_FRAMES_PER_SECOND, DEFAULT_LIVES};
use sideways::entities::{GameMode, GameState};
use sideways::error::Result;

use crate::input::KeyTracker;

#[derive(Parser, Debug)]
#[command(name = "sideways")]
#[command(about = "Side-scrolling shoot-'em-up for the terminal")]
struct Args {
    /// Seed for the game's random number generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FRAMES_PER_SECOND)]
    fps: u32,

    /// Spare lives at the start of each game
    #[arg(long, default_value_t = DEFAULT_LIVES)]
    lives: u32,

    /// Delay before a destroyed ship respawns, in milliseconds
    #[arg(long, default_value_t = 1000)]
    respawn_delay_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> GameConfig {
        GameConfig {
            frames_per_second: self.fps,
            lives: self.lives,
            respawn_delay: Duration::from_millis(self.respawn_delay_ms),
            ..GameConfig::default()
        }
    }
}

/// Logs go to a file only; anything on stdout/stderr would tear the frame.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs frames until the player quits: drain input, one tick, render, then
/// sleep out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_interval = config.frame_interval();
    let started = Instant::now();
    let mut keys = KeyTracker::new();
    let mut state = init_state(config, rng);

    loop {
        let frame_start = Instant::now();

        if state.mode == GameMode::Restart {
            info!(wave = state.wave_number, "starting a new game");
            // Keep counting frames so held-key stamps stay in the past.
            state = GameState {
                frame: state.frame,
                ..init_state(config, rng)
            };
        }
        let frame = state.frame;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            keys.handle(&ev, frame);
        }
        let player_input = keys.snapshot(frame);
        if player_input.quit {
            info!(frame, "quit requested");
            return Ok(());
        }

        state = tick(&state, &player_input, started.elapsed(), rng);

        display::render(out, &state, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config();
    config.validate()?;

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, fps = config.frames_per_second, lives = config.lives, "starting sideways");
    let mut rng = StdRng::seed_from_u64(seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold windows.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
