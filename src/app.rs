//! Wiring between arguments, the interaction loop and the printed result.

use std::io::Write;

use tracing::debug;

use crate::args::{Args, get_initial_date};
use crate::calendar::CalendarState;
use crate::error::PickError;
use crate::formatter::format_date;
use crate::picker::{ExitReason, Finished, KeySource, Picker, Screen};
use crate::types::PickerContext;

/// Validated arguments, ready to start the loop.
pub struct Session {
    picker: Picker,
    initial: CalendarState,
}

/// Validate arguments before any terminal setup happens.
pub fn prepare(args: &Args) -> Result<Session, PickError> {
    prepare_with_context(args, PickerContext::new(args)?)
}

/// Build a session from an already constructed context.
///
/// Without a positional date the picker starts at `ctx.today`.
pub fn prepare_with_context(args: &Args, ctx: PickerContext) -> Result<Session, PickError> {
    let initial = get_initial_date(args, ctx.today)?;
    debug!("APP: initial date {}, context {:?}", initial, ctx);

    Ok(Session {
        picker: Picker::new(ctx),
        initial: CalendarState::new(initial),
    })
}

impl Session {
    pub fn context(&self) -> &PickerContext {
        self.picker.context()
    }

    pub fn pick<K: KeySource, S: Screen>(
        &self,
        keys: &mut K,
        screen: &mut S,
    ) -> Result<Finished, PickError> {
        self.picker.run(self.initial, keys, screen)
    }

    /// Print the selected date as one line; nothing is written on cancel.
    pub fn emit<W: Write>(&self, finished: Finished, out: &mut W) -> Result<ExitReason, PickError> {
        if finished.reason == ExitReason::Selected {
            let line = format_date(finished.state.focused(), &self.context().output_format)?;
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        Ok(finished.reason)
    }
}

/// Prepare, pick and emit in one go.
pub fn run<K, S, W>(
    args: &Args,
    keys: &mut K,
    screen: &mut S,
    out: &mut W,
) -> Result<ExitReason, PickError>
where
    K: KeySource,
    S: Screen,
    W: Write,
{
    let session = prepare(args)?;
    let finished = session.pick(keys, screen)?;
    session.emit(finished, out)
}
