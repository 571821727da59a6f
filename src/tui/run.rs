//! Effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Submission timer thread: sends the round-trip completion
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::state::{Action, App, AppEvent, Effect, Focus, Screen, Transition};
use super::update::{handle_submit_done, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Context-sensitive: while the notes field has focus, printable
/// characters are text input rather than shortcuts. Returns None for keys
/// that don't map to any action on the current screen.
pub fn map_key(key: KeyEvent, screen: &Screen) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Notes editing swallows printable characters
    if let Screen::Form { focus: Focus::Notes } = screen {
        match key.code {
            KeyCode::Char(c) => return Some(Action::Insert(c)),
            KeyCode::Backspace => return Some(Action::Backspace),
            _ => {}
        }
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),

        // Widget activation / dismissal
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Esc => match screen {
            // No overlay to dismiss on the bare form — Esc quits
            Screen::Form { .. } => Some(Action::Quit),
            _ => Some(Action::Back),
        },

        // Course quick-select
        KeyCode::Char(c @ '1'..='3') => Some(Action::NumberKey(c as u8 - b'0')),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn the submission timer: sleep for the configured delay, then report
/// completion, echoing back the token of the submission it belongs to.
fn spawn_submit_timer(delay: Duration, token: u64, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        // If the receiver is gone, the app was torn down mid-flight;
        // nothing to do.
        let _ = tx.send(AppEvent::SubmitDone { token });
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the registration form event loop.
///
/// This is the main entry point for the TUI. It sets up the terminal and
/// runs until the user quits. `submit_delay` is the simulated round-trip
/// latency applied between an accepted submit and its completion.
pub fn run(submit_delay: Duration) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key, &app.screen) {
                    let screen = std::mem::take(&mut app.screen);
                    let transition = update(screen, &action, &mut app.form, &mut app.errors);

                    match transition {
                        Transition::Screen(new_screen) => {
                            app.screen = new_screen;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                        Transition::Effect(effect) => {
                            handle_effect(effect, &mut app, submit_delay, &tx);
                        }
                    }
                }
            }
            AppEvent::SubmitDone { token } => {
                handle_submit_done(&mut app, token);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(
    effect: Effect,
    app: &mut App,
    submit_delay: Duration,
    tx: &mpsc::Sender<AppEvent>,
) {
    match effect {
        Effect::BeginSubmit => {
            // A fresh token per accepted submit; completions carrying an
            // older one are dropped by handle_submit_done.
            app.submit_token += 1;
            app.screen = Screen::Submitting;
            spawn_submit_timer(submit_delay, app.submit_token, tx.clone());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
