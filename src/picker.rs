//! Interaction loop: read a key, map it, apply it, redraw.
//!
//! The loop is generic over where keys come from ([`KeySource`]) and where
//! frames go ([`Screen`]), so it runs the same against a terminal or a
//! scripted test double.

use std::io;

use crossterm::event::KeyEvent;
use tracing::{debug, info, trace};

use crate::calendar::CalendarState;
use crate::error::PickError;
use crate::formatter::render_picker;
use crate::keys::{Command, map_key};
use crate::types::PickerContext;

/// One event delivered to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    /// The display changed size; the current frame is drawn again.
    Resize,
    /// A process-level interrupt (SIGINT/SIGTERM), handled like a cancel key.
    Interrupt,
}

/// Blocking source of input events.
pub trait KeySource {
    fn next_input(&mut self) -> io::Result<Input>;
}

/// Display surface receiving each rendered frame.
pub trait Screen {
    fn draw(&mut self, lines: &[String]) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Selected,
    Cancelled,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Selected,
    Cancelled,
}

/// Final state handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub state: CalendarState,
    pub reason: ExitReason,
}

/// Pure transition for one command.
pub fn step(state: CalendarState, command: Command) -> (CalendarState, LoopState) {
    match command {
        Command::Select => (state.select(), LoopState::Selected),
        Command::Cancel => (state.cancel(), LoopState::Cancelled),
        other => (state.apply(other), LoopState::Running),
    }
}

pub struct Picker {
    ctx: PickerContext,
}

impl Picker {
    pub fn new(ctx: PickerContext) -> Self {
        Picker { ctx }
    }

    pub fn context(&self) -> &PickerContext {
        &self.ctx
    }

    /// Run until the user selects or cancels.
    pub fn run<K, S>(
        &self,
        initial: CalendarState,
        keys: &mut K,
        screen: &mut S,
    ) -> Result<Finished, PickError>
    where
        K: KeySource,
        S: Screen,
    {
        let mut state = initial;
        info!("LOOP: starting at {}", state.focused());
        screen.draw(&render_picker(&self.ctx, &state))?;

        loop {
            let command = match keys.next_input()? {
                Input::Key(key) => map_key(key),
                Input::Interrupt => {
                    info!("LOOP: interrupted");
                    Command::Cancel
                }
                Input::Resize => {
                    trace!("LOOP: resize, redrawing");
                    screen.draw(&render_picker(&self.ctx, &state))?;
                    continue;
                }
            };
            if command == Command::Ignore {
                continue;
            }

            let (next, loop_state) = step(state, command);
            state = next;
            debug!("LOOP: {:?} -> {} ({:?})", command, state.focused(), loop_state);

            match loop_state {
                LoopState::Running => screen.draw(&render_picker(&self.ctx, &state))?,
                LoopState::Selected => {
                    info!("LOOP: selected {}", state.focused());
                    return Ok(Finished {
                        state,
                        reason: ExitReason::Selected,
                    });
                }
                LoopState::Cancelled => {
                    info!("LOOP: cancelled");
                    return Ok(Finished {
                        state,
                        reason: ExitReason::Cancelled,
                    });
                }
            }
        }
    }
}
