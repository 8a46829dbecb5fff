//! Error type shared by argument handling and the interaction loop.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    /// The positional date matched neither `YYYY-MM-DD` nor `YYYYMMDDThhmmssZ`.
    #[error("Invalid date format: {0}")]
    InvalidInputDate(String),

    /// The output pattern contains a specifier chrono does not understand.
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    /// Reading input or drawing failed once the loop was running.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
