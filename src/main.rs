#![deny(unused_doc_comments)]

mod display;

use std::fs::File;
use std::io::{self, stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alien_invasion::compute::{init_state, HitOutcome};
use alien_invasion::controller::{Control, GameController};
use alien_invasion::settings::Settings;
use alien_invasion::stats::HighScoreFile;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Pause after losing a ship so the player sees what happened.
const HIT_PAUSE: Duration = Duration::from_millis(500);

const LOG_FILE: &str = "alien_invasion.log";

/// Smallest terminal that fits a fleet, the ship and the HUD.
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 12;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file, never to stdout/stderr which would corrupt the screen.
fn init_logging() {
    let writer: Box<dyn Write + Send> = match File::create(LOG_FILE) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .init();
}

// ── Terminal ──────────────────────────────────────────────────────────────────

/// Restore terminal state — called on exit and from the panic hook.
fn restore_terminal(keyboard_enhanced: bool) {
    let mut out = stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Mouse capture stands in for the pointer: on while the Play button is
/// clickable, off during play.
fn sync_mouse_capture<W: Write>(out: &mut W, captured: &mut bool, want: bool) -> Result<()> {
    if *captured == want {
        return Ok(());
    }
    if want {
        out.execute(EnableMouseCapture)?;
    } else {
        out.execute(DisableMouseCapture)?;
    }
    *captured = want;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let (width, height) = terminal::size().context("failed to query terminal size")?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        bail!(
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            MIN_WIDTH,
            MIN_HEIGHT
        );
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal(keyboard_enhanced);
        original_hook(panic_info);
    }));

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!(error = %err, "terminal event read failed, input thread stopping");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, width, height);

    let _ = out.flush();
    restore_terminal(keyboard_enhanced);

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, width: u16, height: u16) -> Result<()> {
    let scores = HighScoreFile::default();
    let high_score = scores.load();
    info!(width, height, high_score, "alien invasion starting");

    let settings = Settings::new(width, height);
    let mut game = GameController::new(init_state(settings, high_score));

    let clock = Instant::now();
    let mut mouse_captured = false;

    'game: loop {
        let frame_start = Instant::now();

        sync_mouse_capture(out, &mut mouse_captured, !game.state.stats.game_active)?;

        if game.drain_events(rx) == Control::Quit {
            break 'game;
        }

        let outcome = game.update(clock.elapsed().as_millis() as u64);

        display::render(out, &game.state)?;

        if outcome == Some(HitOutcome::ShipLost) {
            thread::sleep(HIT_PAUSE);
            continue;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    let best = game.state.stats.high_score;
    info!(high_score = best, frames = game.frame(), "quitting");
    if let Err(err) = scores.save(best) {
        warn!(error = %err, "could not save high score");
        return Err(err).context("high score was not saved");
    }
    Ok(())
}
