use musecp_link::LinkError;
use thiserror::Error;

/// Errors surfaced by the processor facade
#[derive(Debug, Error)]
pub enum MuseError {
    /// The command could not be delivered to the processor
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// The command identifier is not in the command table
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The processor protocol has no way to perform this action
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MuseError>;
