// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::quiz::Step;
use crate::recommend::{Lookup, RecommendationSource, spawn_lookup};
use crate::ui::{screens, state::AppState};

mod quiz;
mod results;

/// Shared handle to whatever answers the results stage
pub type SharedSource = Arc<dyn RecommendationSource + Send + Sync>;

// Event types sent to the main loop
enum UiEvent {
    Input(Event),   // Keyboard, mouse, or other terminal events
    Tick,           // Periodic redraw for animations
    Lookup(Lookup), // Background recommendation finished
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(16); // ~60 FPS

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Everything the loop needs besides terminal state
struct Session {
    source: SharedSource,
    reveal_delay: Duration,
    tx: Sender<UiEvent>,
}

impl Session {
    /// Kick off the lookup once the results stage is entered
    fn maybe_start_lookup(&self, state: &mut AppState) {
        let Some((generation, answers)) = state.begin_lookup() else {
            return;
        };
        let tx = self.tx.clone();
        spawn_lookup(
            Arc::clone(&self.source),
            answers,
            self.reveal_delay,
            generation,
            move |lookup| {
                // The UI may have exited already
                let _ = tx.send(UiEvent::Lookup(lookup));
            },
        );
    }
}

pub fn run_ui(config: &Config, source: SharedSource) -> io::Result<()> {
    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new();

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx.clone());

    let session = Session {
        source,
        reveal_delay: config.reveal_delay(),
        tx: event_tx,
    };

    info!("quiz started");
    let result = run_app(&mut terminal, &mut app_state, &session, event_rx);

    // Restore terminal: leave alternate screen and disable mouse capture
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    session: &Session,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Collect all pending events so we can coalesce tick bursts and keep inputs snappy
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();
        let mut lookups: Vec<Lookup> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(evt) => collect(evt, &mut pending_ticks, &mut pending_inputs, &mut lookups),
            Err(_) => return Ok(()),
        }
        while let Ok(evt) = event_rx.try_recv() {
            collect(evt, &mut pending_ticks, &mut pending_inputs, &mut lookups);
        }

        for lookup in lookups {
            if state.finish_lookup(lookup) {
                info!("result revealed");
            }
        }

        // Process input events first so user commands are never stuck behind a tick backlog
        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                _ => {}
            }
        }

        session.maybe_start_lookup(state);
        state.tick = state.tick.wrapping_add(pending_ticks);

        terminal.draw(|frame| screens::render(frame, state))?;
    }
}

fn collect(evt: UiEvent, ticks: &mut u64, inputs: &mut Vec<Event>, lookups: &mut Vec<Lookup>) {
    match evt {
        UiEvent::Tick => *ticks += 1,
        UiEvent::Input(ev) => inputs.push(ev),
        UiEvent::Lookup(lookup) => lookups.push(lookup),
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Returns true when the app should exit
fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if should_quit(&key) {
        return true;
    }

    let before = state.step();
    match before {
        Step::Landing => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.start();
            }
        }
        Step::Results => results::handle_results_key(key, state),
        _ => quiz::handle_question_key(key, state),
    }

    if state.step() != before {
        debug!(from = %before, to = %state.step(), "stage changed");
    }
    false
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.click(mouse.column, mouse.row);
            state.begin_drag(mouse.column, mouse.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => state.update_drag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => {
            state.update_drag(mouse.column);
            state.end_drag();
        }
        _ => {}
    }
}
