//! The seam through which the link opens sockets

use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::LinkConfig;

/// Opens a writable stream to the processor
///
/// `DeviceLink` never creates sockets itself; every connection (the initial
/// one, lazy ones, and the single recovery reconnect) goes through this
/// trait.
pub trait Connector {
    type Stream: Write;

    fn connect(&self, host: &str, port: u16) -> io::Result<Self::Stream>;
}

/// Plain TCP connector honouring a [`LinkConfig`]
#[derive(Debug, Clone, Default)]
pub struct TcpConnector {
    config: LinkConfig,
}

impl TcpConnector {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    fn open(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        let mut last_error = None;

        for addr in (host, port).to_socket_addrs()? {
            let attempt = match self.config.connect_timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };

            match attempt {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    tracing::debug!("Connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{}:{} did not resolve to any address", host, port),
            )
        }))
    }
}

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        let stream = self.open(host, port)?;
        stream.set_write_timeout(self.config.write_timeout)?;
        stream.set_nodelay(self.config.nodelay)?;
        Ok(stream)
    }
}
