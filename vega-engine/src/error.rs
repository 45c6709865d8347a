//! Error Types
//!
//! Crushed is game state, not an error. Errors here are presentation
//! failures: fatal at start-up, or fatal when a restart cannot reacquire
//! resources.

use crate::driver::BackendError;

/// Loop driver errors.
#[derive(Debug, thiserror::Error)]
pub enum VegaError {
    /// Presentation resources could not be acquired at start-up.
    #[error("initialization failed: {0}")]
    Init(#[source] BackendError),

    /// A frame could not be presented.
    #[error("present failed: {0}")]
    Present(#[source] BackendError),

    /// Presentation resources could not be reacquired on restart.
    #[error("restart failed: {0}")]
    RestartFailed(#[source] BackendError),
}
