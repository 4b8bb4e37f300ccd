//! Typed errors raised by the cleaning stages

use thiserror::Error;

/// Errors that abort a cleaning run
#[derive(Debug, Error)]
pub enum CleanError {
    /// Two distinct raw headers normalized to the same token
    #[error(
        "column name collision: {raw_a:?} and {raw_b:?} both normalize to {token:?}"
    )]
    ColumnCollision {
        token: String,
        raw_a: String,
        raw_b: String,
    },
}
