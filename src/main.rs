//! Date picker CLI application.
//!
//! # Usage
//! ```ignore
//! datepick                  // Start at today
//! datepick 2025-12-24       // Start at a given date
//! datepick -f '%d.%m.%Y'    // Custom output format
//! ```

use std::io;

use datepick::app;
use datepick::args::Args;
use datepick::error::PickError;
use datepick::picker::ExitReason;
use datepick::terminal::{TerminalKeys, TerminalScreen, open_surface};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_file);

    match run(&args) {
        Ok(ExitReason::Selected) => {}
        Ok(ExitReason::Cancelled) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("datepick: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ExitReason, PickError> {
    let session = app::prepare(args)?;

    // The screen must be restored before anything is printed to stdout.
    let finished = {
        let mut keys = TerminalKeys::new()?;
        let surface = open_surface(session.context().surface);
        let mut screen = TerminalScreen::enter(surface)?;
        session.pick(&mut keys, &mut screen)?
    };

    session.emit(finished, &mut io::stdout().lock())
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
