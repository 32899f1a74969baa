mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use catch_em_all::compute::{init_state, update, TickInput};
use catch_em_all::config::{GameConfig, WINDOW_TITLE};
use catch_em_all::projection::draw;

use display::Viewport;

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 TPS

// ── Input sampling ────────────────────────────────────────────────────────────

/// Pointer and confirm state accumulated from terminal events between ticks.
struct InputSampler {
    cursor_col: u16,
    button_held: bool,
    /// Set by any left press, so a press and release inside one tick still counts.
    clicked: bool,
    space_pressed: bool,
}

enum Control {
    Continue,
    Quit,
}

impl InputSampler {
    fn new(view: Viewport) -> Self {
        Self { cursor_col: view.cols / 2, button_held: false, clicked: false, space_pressed: false }
    }

    fn handle(&mut self, ev: Event, view: &mut Viewport) -> Control {
        match ev {
            Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Control::Quit;
                }
                KeyCode::Char(' ') => self.space_pressed = true,
                _ => {}
            },
            Event::Mouse(MouseEvent { kind, column, .. }) => {
                self.cursor_col = column;
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.button_held = true;
                        self.clicked = true;
                    }
                    MouseEventKind::Up(MouseButton::Left) => self.button_held = false,
                    _ => {}
                }
            }
            Event::Resize(cols, rows) => {
                *view = Viewport::new(cols, rows);
                log::info!("terminal resized to {}x{}", cols, rows);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Snapshot for this tick; one-shot presses and clicks are consumed.
    fn take(&mut self, view: &Viewport) -> TickInput {
        let input = TickInput {
            cursor_x: view.column_to_world(self.cursor_col),
            confirm: self.space_pressed || self.clicked || self.button_held,
        };
        self.space_pressed = false;
        self.clicked = false;
        input
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let mut view = Viewport::new(cols, rows);
    let mut sampler = InputSampler::new(view);
    let mut state = init_state(GameConfig::default());

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Control::Quit = sampler.handle(ev, &mut view) {
                log::info!("quit requested at score {}", state.score);
                return Ok(());
            }
        }

        let input = sampler.take(&view);
        state = update(&state, &input, &mut rng);
        display::render(out, &draw(&state), view).context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("{} starting", WINDOW_TITLE);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    let setup = setup_terminal(&mut out);

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

    let result = setup.and_then(|()| game_loop(&mut out, &rx));

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("{} exiting", WINDOW_TITLE);
    result
}

fn setup_terminal<W: Write>(out: &mut W) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))
        .context("setting terminal title")?;
    out.execute(cursor::Hide).context("hiding cursor")?;
    out.execute(EnableMouseCapture).context("enabling mouse capture")?;
    Ok(())
}
