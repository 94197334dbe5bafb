/// Errors raised by the backend and the frame-loop driver.
///
/// The simulation itself cannot fail: removing an entity that is already gone
/// is simply a no-op during compaction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Writing to or configuring the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The background input reader stopped delivering events.
    #[error("input reader thread stopped")]
    InputClosed,

    #[error("terminal too small: {cols}x{rows} cells, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
