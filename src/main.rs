mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use dodge_hurdles::compute::{init_state, tick};
use dodge_hurdles::entities::{FrameInput, PlayerColor, SessionState, SessionStatus};
use dodge_hurdles::settings::home_dir;
use dodge_hurdles::{HighScores, Settings};

use display::Viewport;

const LOG_FILE: &str = ".dodge_hurdles.log";

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Returns true if `key` was seen within the last `window` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64, window: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= window)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64, window: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame, window))
}

fn is_quit_key(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn viewport() -> std::io::Result<Viewport> {
    let (width, height) = terminal::size()?;
    Ok(Viewport::new(width, height))
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(PlayerColor),
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    mut selected: PlayerColor,
    best: Option<u32>,
) -> std::io::Result<MenuResult> {
    loop {
        display::render_menu(out, viewport()?, selected, best)?;

        // Block until something happens; redraw on every event (incl. resize)
        let Ok(ev) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev {
            if kind == KeyEventKind::Release {
                continue;
            }
            if is_quit_key(&code, modifiers) {
                return Ok(MenuResult::Quit);
            }
            match code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => selected = selected.prev(),
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => selected = selected.next(),
                KeyCode::Enter => return Ok(MenuResult::Start(selected)),
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input is polled, not dispatched: pending events are drained into a
/// `key_frame` map (key → frame it was last pressed or repeated) and a single
/// `FrameInput` snapshot is built from it before the simulation runs.
/// Terminals with keyboard-enhancement support report releases, which drop
/// the key at once; elsewhere keys expire after the hold window.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut SessionState,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let frame_budget = Duration::from_millis(settings.frame_ms());
    let window = settings.hold_window_frames;

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut quit = false;
        let mut replay = false;
        loop {
            match rx.try_recv() {
                Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) => match kind {
                    KeyEventKind::Press => {
                        quit |= is_quit_key(&code, modifiers);
                        replay |= matches!(code, KeyCode::Char('r') | KeyCode::Char('R'));
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => break,
                // Input thread gone: treat like a window close
                Err(mpsc::TryRecvError::Disconnected) => {
                    quit = true;
                    break;
                }
            }
        }

        match state.status {
            SessionStatus::Running => {
                let input = FrameInput {
                    dt_ms: last_frame.elapsed().as_millis().min(u128::from(u32::MAX)) as u32,
                    left: any_held(
                        &key_frame,
                        &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                        frame,
                        window,
                    ),
                    right: any_held(
                        &key_frame,
                        &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                        frame,
                        window,
                    ),
                    quit,
                };
                last_frame = Instant::now();
                *state = tick(state, &input, &mut rng);
            }
            SessionStatus::Lost => {
                if quit {
                    return Ok(true);
                }
                if replay {
                    return Ok(false);
                }
            }
            SessionStatus::Quit => {}
        }

        if state.status == SessionStatus::Quit {
            return Ok(true);
        }

        display::render(out, viewport()?, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// The terminal is owned by the game, so logs go to a file.  Nothing is
/// logged unless `RUST_LOG` asks for more than the default `warn`.
fn init_logging() {
    let path = home_dir().join(LOG_FILE);
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // Without a file, stay quiet rather than scribble on the screen.
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

fn main() -> std::io::Result<()> {
    init_logging();
    info!("Dodge Hurdles starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!("exiting on terminal error: {}", e);
    }
    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let settings_path = Settings::default_path();
    let scores_path = HighScores::default_path();

    let mut settings = Settings::load_or_default(&settings_path);
    let mut scores = HighScores::load(&scores_path).unwrap_or_else(|e| {
        warn!("Ignoring high scores at {}: {}", scores_path.display(), e);
        HighScores::new()
    });

    loop {
        let color = match show_menu(out, rx, settings.player_color, scores.top_score())? {
            MenuResult::Quit => break,
            MenuResult::Start(color) => color,
        };

        if color != settings.player_color {
            settings.player_color = color;
            if let Err(e) = settings.save(&settings_path) {
                warn!("Could not save settings: {}", e);
            }
        }

        let mut state = init_state(color, scores.top_score().unwrap_or(0));
        let quit = game_loop(out, &mut state, rx, &settings)?;

        if let Some(rank) = scores.add_score(state.score, state.level(), state.elapsed_secs()) {
            info!("Score {} ranked #{}", state.score, rank);
            if let Err(e) = scores.save(&scores_path) {
                warn!("Could not save high scores: {}", e);
            }
        }

        if quit {
            break;
        }
    }
    Ok(())
}
