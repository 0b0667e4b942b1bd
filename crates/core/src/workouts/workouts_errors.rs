//! Session ledger error types.

use thiserror::Error;

/// Errors raised by the session state machine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A session is already running; it must be ended before a new one starts.
    #[error("Workout '{workout_id}' is already in progress")]
    AlreadyInProgress { workout_id: String },

    /// The operation needs a running session.
    #[error("No workout is in progress")]
    NotInProgress,

    /// The in-progress workout cannot be deleted.
    #[error("Workout '{0}' is in progress and cannot be deleted")]
    WorkoutActive(String),
}
