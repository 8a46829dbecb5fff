//! Keyboard event to command mapping.
//!
//! The mapping is total and stateless: every key event yields exactly one
//! [`Command`], with [`Command::Ignore`] for anything unbound.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

/// A single navigation or selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveDay(i64),
    MoveWeek(i64),
    MoveMonth(i64),
    MoveYear(i64),
    Select,
    Cancel,
    Ignore,
}

/// Key help shown under the calendar.
pub const KEY_HELP: &str = "←→ day  ↑↓ week  PgUp/PgDn month  S-PgUp/S-PgDn year  ⏎ pick  q quit";

/// Convert a key event into a command.
pub fn map_key(key: KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let command = match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Command::Cancel,
        _ if ctrl => Command::Ignore,

        KeyCode::Left | KeyCode::Char('h') => Command::MoveDay(-1),
        KeyCode::Right | KeyCode::Char('l') => Command::MoveDay(1),
        KeyCode::Up | KeyCode::Char('k') => Command::MoveWeek(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::MoveWeek(1),

        KeyCode::PageUp if shift => Command::MoveYear(-1),
        KeyCode::PageDown if shift => Command::MoveYear(1),
        KeyCode::Char('{') => Command::MoveYear(-1),
        KeyCode::Char('}') => Command::MoveYear(1),

        KeyCode::PageUp | KeyCode::Char('[') => Command::MoveMonth(-1),
        KeyCode::PageDown | KeyCode::Char(']') => Command::MoveMonth(1),

        KeyCode::Enter => Command::Select,
        KeyCode::Char('q') | KeyCode::Esc => Command::Cancel,

        _ => Command::Ignore,
    };

    trace!("KEY: {:?} {:?} -> {:?}", key.code, key.modifiers, command);
    command
}
