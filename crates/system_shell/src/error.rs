use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced to the terminal as error lines.
pub enum ShellError {
    /// Malformed command line or arguments.
    #[error("{0}")]
    Usage(String),
    /// The first word did not name a registered command.
    #[error("Unknown command: {0}. Type `help`.")]
    UnknownCommand(String),
    /// A named project, note, or app does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A host service refused or failed.
    #[error("{0}")]
    Unavailable(String),
}
