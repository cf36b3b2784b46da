//! Private socket link for Acurus Muse processor communication
//!
//! This crate owns the single persistent socket to a processor, builds the
//! `POST AVR` request that wraps each command in the device's XML control
//! envelope, and recovers from a broken connection by reconnecting and
//! resending exactly once. The protocol is fire-and-forget: nothing is read
//! back from the device.
//!
//! ```rust,no_run
//! use musecp_link::{DeviceLink, DEFAULT_PORT};
//!
//! let mut link = DeviceLink::new("192.168.1.40", DEFAULT_PORT, "Main Zone");
//! if let Err(e) = link.send("power-on", "") {
//!     eprintln!("command dropped: {}", e);
//! }
//! ```

mod config;
mod connector;
mod envelope;
mod error;
mod link;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use config::LinkConfig;
pub use connector::{Connector, TcpConnector};
pub use envelope::{build_body, build_request, DEFAULT_PORT, USER_AGENT};
pub use error::LinkError;
pub use link::DeviceLink;
