use thiserror::Error;

/// The ways a single notification invocation can fail.
///
/// The Lambda entry point logs these and swallows them (the event bus owns
/// redelivery policy), but internal operations surface them as values so
/// tests can assert on failure paths directly.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// the event payload was missing or carried an unusable field
    #[error("failed to decode event: {0}")]
    Decode(String),
    /// no tracked job matches the task execution arn from the event
    #[error("no job found for task execution arn {0}")]
    JobNotFound(String),
    /// any other data-access failure
    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}
