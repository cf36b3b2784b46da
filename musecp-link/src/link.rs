//! Persistent, self-healing socket to a single processor

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::envelope::build_request;
use crate::{Connector, LinkConfig, LinkError, TcpConnector};

/// Owns the connection to one processor and delivers commands over it
///
/// The connection is optional at all times: it is opened best-effort at
/// construction, lazily on the next send when absent, and discarded as
/// soon as a write fails. A broken connection is healed at most once per
/// send (one reconnect, one resend); nothing loops.
///
/// The link is not meant to be shared between threads without external
/// locking. Every call blocks until the socket operation completes or its
/// configured timeout expires.
pub struct DeviceLink<C: Connector = TcpConnector> {
    host: String,
    port: u16,
    zone: String,
    connector: C,
    connection: Option<C::Stream>,
}

impl DeviceLink<TcpConnector> {
    /// Create a TCP link with the default [`LinkConfig`]
    pub fn new(host: impl Into<String>, port: u16, zone: impl Into<String>) -> Self {
        Self::with_connector(host, port, zone, TcpConnector::default())
    }

    /// Create a TCP link with explicit timeouts and socket options
    pub fn with_config(
        host: impl Into<String>,
        port: u16,
        zone: impl Into<String>,
        config: LinkConfig,
    ) -> Result<Self, LinkError> {
        config.validate()?;
        Ok(Self::with_connector(host, port, zone, TcpConnector::new(config)))
    }

    pub fn config(&self) -> &LinkConfig {
        self.connector.config()
    }
}

impl<C: Connector> DeviceLink<C> {
    /// Create a link over any connector and try to connect once
    ///
    /// A failed initial connect is not an error; the next send retries it.
    pub fn with_connector(
        host: impl Into<String>,
        port: u16,
        zone: impl Into<String>,
        connector: C,
    ) -> Self {
        let mut link = Self {
            host: host.into(),
            port,
            zone: zone.into(),
            connector,
            connection: None,
        };
        link.connection = link.connect();
        link
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Open a fresh connection, logging and swallowing any failure
    pub fn connect(&self) -> Option<C::Stream> {
        match self.connector.connect(&self.host, self.port) {
            Ok(stream) => {
                debug!("Connected to AVR at {}:{}", self.host, self.port);
                Some(stream)
            }
            Err(e) => {
                warn!("Connection error ({}:{}): {}", self.host, self.port, e);
                None
            }
        }
    }

    /// Replace the current connection with a fresh one
    ///
    /// Returns whether a connection is held afterwards.
    pub fn reconnect(&mut self) -> bool {
        self.connection = None;
        self.connection = self.connect();
        self.connection.is_some()
    }

    /// Drop the current connection, if any
    pub fn disconnect(&mut self) {
        if self.connection.take().is_some() {
            debug!("Disconnected from AVR at {}:{}", self.host, self.port);
        }
    }

    /// Wrap `command_token` and `param` in the control envelope and send it
    ///
    /// `Ok(())` only means the transport accepted every byte; the device
    /// never acknowledges commands.
    pub fn send(&mut self, command_token: &str, param: &str) -> Result<(), LinkError> {
        let request = build_request(self.port, &self.zone, command_token, param);
        self.deliver(request.as_bytes())
    }

    fn deliver(&mut self, payload: &[u8]) -> Result<(), LinkError> {
        if self.connection.is_none() {
            self.connection = self.connect();
        }

        let Some(stream) = self.connection.as_mut() else {
            warn!("Cannot connect to AVR");
            return Err(LinkError::NotConnected {
                host: self.host.clone(),
                port: self.port,
            });
        };

        match write_payload(stream, payload) {
            Ok(()) => {
                debug!("Sent {} bytes to AVR", payload.len());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::WriteZero => {
                self.connection = None;
                warn!("Send fail, disconnecting from AVR");
                Err(LinkError::ZeroBytes)
            }
            Err(e) if is_connection_error(&e) => {
                warn!("Connection error, retrying. {}", e);
                self.connection = None;
                self.resend(payload)
            }
            Err(e) => {
                self.connection = None;
                warn!("Send to AVR failed: {}", e);
                Err(LinkError::Io(e))
            }
        }
    }

    /// The single recovery attempt after a broken connection
    fn resend(&mut self, payload: &[u8]) -> Result<(), LinkError> {
        let mut stream = match self.connector.connect(&self.host, self.port) {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Reconnect to AVR failed: {}", e);
                return Err(LinkError::ReconnectFailed(e));
            }
        };

        match write_payload(&mut stream, payload) {
            Ok(()) => {
                debug!("Resent {} bytes to AVR after reconnect", payload.len());
                self.connection = Some(stream);
                Ok(())
            }
            Err(e) => {
                warn!("Resend to AVR failed: {}", e);
                Err(LinkError::ResendFailed(e))
            }
        }
    }
}

impl<C: Connector> fmt::Debug for DeviceLink<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceLink")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("zone", &self.zone)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Write the whole payload; a zero-length write surfaces as `WriteZero`
fn write_payload<W: Write>(stream: &mut W, payload: &[u8]) -> io::Result<()> {
    stream.write_all(payload)?;
    stream.flush()
}

/// Errors that mean the peer went away and a fresh socket may succeed
fn is_connection_error(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::NotConnected
            | io::ErrorKind::UnexpectedEof
    )
}
