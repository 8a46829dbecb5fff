//! Terminal session: display surface, raw mode and crossterm key events.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{debug, warn};

use crate::picker::{Input, KeySource, Screen};
use crate::types::SurfaceKind;

const TTY_PATH: &str = "/dev/tty";

/// How often the interrupt flag is checked while waiting for input.
const EVENT_POLL_INTERVAL_MS: u64 = 100;

/// Open the writer the calendar is drawn on.
///
/// Falls back to stderr when the controlling terminal cannot be opened.
pub fn open_surface(kind: SurfaceKind) -> Box<dyn Write> {
    match kind {
        SurfaceKind::Stderr => Box::new(io::stderr()),
        SurfaceKind::Tty => match OpenOptions::new().write(true).open(TTY_PATH) {
            Ok(tty) => {
                debug!("TERM: drawing on {}", TTY_PATH);
                Box::new(tty)
            }
            Err(e) => {
                warn!("TERM: cannot open {}: {}, using stderr", TTY_PATH, e);
                Box::new(io::stderr())
            }
        },
    }
}

/// Raw-mode alternate screen; restored when dropped.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalScreen { out })
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row), Print(line))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalScreen<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Input read from the terminal.
///
/// SIGINT and SIGTERM set a flag that is reported as [`Input::Interrupt`],
/// so the loop unwinds normally and the screen guard restores the terminal.
pub struct TerminalKeys {
    interrupted: Arc<AtomicBool>,
}

impl TerminalKeys {
    pub fn new() -> io::Result<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&interrupted))?;
        }
        Ok(Self::with_flag(interrupted))
    }

    /// Use an existing interrupt flag instead of registering signal handlers.
    pub fn with_flag(interrupted: Arc<AtomicBool>) -> Self {
        TerminalKeys { interrupted }
    }
}

impl KeySource for TerminalKeys {
    fn next_input(&mut self) -> io::Result<Input> {
        loop {
            if self.interrupted.load(Ordering::Relaxed) {
                return Ok(Input::Interrupt);
            }
            if !event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => return Ok(Input::Key(key)),
                Event::Resize(cols, rows) => {
                    debug!("TERM: resized to {}x{}", cols, rows);
                    return Ok(Input::Resize);
                }
                _ => {}
            }
        }
    }
}
