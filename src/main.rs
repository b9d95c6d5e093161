mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use display::Screen;
use neon_shooter::config::GameConfig;
use neon_shooter::engine::{AudioCue, GameEngine, GameListener, Intents};
use neon_shooter::entities::{RunState, MS_PER_FRAME};

#[derive(Parser, Debug)]
#[command(name = "neon_shooter")]
#[command(about = "Terminal arcade shooter: hold the line against the swarm")]
struct Cli {
    /// TOML file overriding the default game parameters
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write tracing output to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Longest frame the simulation will integrate in one tick, in reference
/// frames.  Stalls (terminal resize, suspend) must not teleport entities.
const MAX_DT: f32 = 3.0;

/// Frames a level-up banner stays on screen.
const BANNER_FRAMES: u32 = 90;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Presentation listener ─────────────────────────────────────────────────────

/// Receives engine notifications for the HUD.  Sound is not synthesised;
/// cues are logged.
#[derive(Default)]
struct Hud {
    banner: Option<(String, u32)>,
}

impl Hud {
    fn banner(&self) -> Option<&str> {
        self.banner.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn age_banner(&mut self) {
        if let Some((_, frames)) = &mut self.banner {
            *frames = frames.saturating_sub(1);
            if *frames == 0 {
                self.banner = None;
            }
        }
    }
}

impl GameListener for Hud {
    fn level_changed(&mut self, level: u32) {
        self.banner = Some((format!(">> LEVEL {level} <<"), BANNER_FRAMES));
    }

    fn game_over(&mut self) {
        self.banner = None;
    }

    fn audio(&mut self, cue: AudioCue) {
        tracing::debug!(?cue, "audio cue");
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<MenuResult> {
    let (width, height) = terminal::size()?;
    display::render_menu(out, Screen { width, height })?;

    // Block until the user makes a choice
    loop {
        let Ok(ev) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        match ev {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Event::Resize(width, height) => display::render_menu(out, Screen { width, height })?,
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the still-fresh keys are
/// folded into one `Intents` value that the engine reads at tick start, so
/// Space and a direction can be held together.  P, R and M are one-shot.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut GameEngine<Hud>,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<bool> {
    let frame_len = Duration::from_secs_f32(engine.config().frame_ms / 1000.0);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => engine.toggle_pause(),
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if engine.state() == RunState::Over =>
                        {
                            engine.restart();
                        }
                        KeyCode::Char('m') | KeyCode::Char('M')
                            if engine.state() == RunState::Over =>
                        {
                            engine.to_menu();
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let intents = Intents {
            left: any_held(&key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
            right: any_held(&key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
            up: any_held(&key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            down: any_held(&key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
            shoot: is_held(&key_frame, &KeyCode::Char(' '), frame),
        };

        let now = Instant::now();
        let dt = (now.duration_since(last_tick).as_secs_f32() * 1000.0 / MS_PER_FRAME).min(MAX_DT);
        last_tick = now;
        engine.tick(dt, &intents, rng);
        engine.listener_mut().age_banner();

        let (width, height) = terminal::size()?;
        display::render(out, Screen { width, height }, &*engine, engine.listener().banner())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neon_shooter=info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
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

    let result = run(&mut out, config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    config: GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut engine = GameEngine::new(config, Hud::default());

    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                engine.start();
                if game_loop(out, &mut engine, rng, rx)? {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    engine.destroy();
    Ok(())
}
