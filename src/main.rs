mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use platformer::compute::{fire, init_state, jump, restart, tick};
use platformer::entities::{GameState, GameStatus, Ruleset};
use platformer::events::FrameEvent;
use platformer::input::{command_for, Command};
use platformer::logging;
use platformer::sprites::SpriteSheet;
use platformer::viewport::Viewport;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Sprite images are looked up here for the Arcade ruleset.
const ASSET_DIR: &str = "assets";

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Ruleset),
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "▲  PLATFORMER  ▲";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select rules:"))?;

    let options: &[(&str, &str, Color, &str)] = &[
        ("1", "Classic", Color::Green, "Hit an enemy, back to the start"),
        ("2", "Arcade ", Color::Yellow, "Stomps score, one hit ends it"),
    ];

    for (i, (key, label, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<8}", label)))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(" — {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("SPACE / ↑ : Jump   F : Fireball   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            })) => match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start(Ruleset::Classic)),
                KeyCode::Char('2') => return Ok(MenuResult::Start(Ruleset::Arcade)),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Blocks like a modal dialog until any key is pressed.  Returns `true` if
/// that key was a quit command or the input thread has gone away.
fn wait_for_key(rx: &mpsc::Receiver<Event>) -> bool {
    loop {
        match rx.recv() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                return command_for(&key) == Some(Command::Quit);
            }
            Ok(_) => {}
            Err(_) => return true,
        }
    }
}

fn log_events(state: &GameState) {
    for event in &state.events {
        match event {
            FrameEvent::EnemySpawned { x } | FrameEvent::PowerUpSpawned { x } => {
                tracing::debug!(frame = state.frame, x, "{:?}", event)
            }
            FrameEvent::GameOver { score } => {
                tracing::info!(frame = state.frame, score, "game over")
            }
            FrameEvent::LevelComplete => tracing::info!(frame = state.frame, "level complete"),
            _ => tracing::debug!(frame = state.frame, "{:?}", event),
        }
    }
}

/// One update + draw per iteration, strictly in sequence.  While the game
/// is over no ticks run; only the overlay is redrawn until a restart.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (width, height) = terminal::size()?;
    let mut viewport = Viewport::new(width, height);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Key(key) => match command_for(&key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Jump) => *state = jump(state),
                    Some(Command::Fire) => *state = fire(state),
                    Some(Command::Restart) if state.status == GameStatus::GameOver => {
                        tracing::info!(score = state.score, "restart");
                        *state = restart(state);
                    }
                    _ => {}
                },
                Event::Resize(w, h) => viewport = Viewport::new(w, h),
                _ => {}
            }
        }

        let dt_ms = frame_start.duration_since(last).as_secs_f32() * 1000.0;
        last = frame_start;

        let mut level_complete = false;
        if state.status == GameStatus::Playing {
            *state = tick(state, dt_ms, &mut rng);
            log_events(state);
            level_complete = state.events.contains(&FrameEvent::LevelComplete);
        }

        display::render(out, state, &viewport, sprites)?;

        if level_complete {
            display::render_level_complete(out, &viewport)?;
            if wait_for_key(rx) {
                return Ok(());
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging(tracing::Level::INFO);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

    // Ask for press/release reporting so auto-repeat can be told apart from
    // fresh presses.  Terminals without support just keep sending presses.
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

    result.context("game loop failed")?;
    tracing::info!("exited cleanly");
    Ok(())
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let ruleset = match show_menu(out, rx)? {
        MenuResult::Quit => return Ok(()),
        MenuResult::Start(ruleset) => ruleset,
    };
    tracing::info!(?ruleset, "starting");

    // Sprites are read once, before the first frame
    let sprites = match ruleset {
        Ruleset::Classic => SpriteSheet::empty(),
        Ruleset::Arcade => SpriteSheet::load(Path::new(ASSET_DIR)),
    };

    let mut state = init_state(ruleset);
    game_loop(out, &mut state, rx, &sprites)
}
