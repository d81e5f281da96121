//! Error type for session operations.
//!
//! Variant messages double as the one-line texts printed at the terminal.
//! None of these is fatal: the menu loop prints the message and carries on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Username already exists.")]
    UsernameTaken,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Please login to add a task.")]
    NotLoggedIn,

    #[error("Invalid task ID.")]
    InvalidTaskId,

    #[error("Please enter a valid date in the format YYYY-MM-DD.")]
    InvalidDate,
}
