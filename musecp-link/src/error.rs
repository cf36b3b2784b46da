//! Error types for the device link

use std::io;
use thiserror::Error;

/// Errors that can occur while delivering a command to the processor
#[derive(Debug, Error)]
pub enum LinkError {
    /// No connection could be established, the command was dropped
    #[error("Cannot connect to AVR at {host}:{port}")]
    NotConnected { host: String, port: u16 },

    /// The transport accepted zero bytes; the connection was discarded
    #[error("Send fail, disconnecting from AVR")]
    ZeroBytes,

    /// The connection broke and the single reconnect attempt failed
    #[error("Reconnect after broken connection failed: {0}")]
    ReconnectFailed(#[source] io::Error),

    /// The connection broke, reconnect succeeded, but the resend failed
    #[error("Resend after reconnect failed: {0}")]
    ResendFailed(#[source] io::Error),

    /// Any other transport error (no retry is attempted)
    #[error("Transport error: {0}")]
    Io(#[source] io::Error),

    /// The link configuration cannot be applied to a socket
    #[error("Invalid link configuration: {0}")]
    InvalidConfig(String),
}

impl LinkError {
    /// True when the command never reached the device because no
    /// connection was available for it.
    pub fn is_dropped(&self) -> bool {
        matches!(self, LinkError::NotConnected { .. } | LinkError::ReconnectFailed(_))
    }
}
