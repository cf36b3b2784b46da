//! # musecp - control client for Acurus Muse processors
//!
//! A small, synchronous device-control interface for a home-automation
//! integration layer:
//!
//! ```rust,no_run
//! use musecp::MuseProcessor;
//!
//! let mut muse = MuseProcessor::new("192.168.1.40");
//! if muse.power_on() {
//!     muse.select_source("Media Server");
//!     muse.mute(true);
//! }
//! assert!(muse.is_on());
//! ```
//!
//! ## State
//!
//! The processor never reports anything back, so every property (power,
//! on/off state, mute, current source) is local bookkeeping updated only
//! after the transport accepted the command. It can drift from the real
//! device if something else changes it.
//!
//! ## Architecture
//!
//! ```text
//! MuseProcessor (named actions + local state)
//!     ↓
//! Command table (identifier → wire token)
//!     ↓
//! musecp-link (XML envelope, socket, one reconnect-and-resend)
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod source;
pub mod state;

pub use command::Command;
pub use config::ProcessorConfig;
pub use error::{MuseError, Result};
pub use processor::MuseProcessor;
pub use source::DEFAULT_SOURCES;
pub use state::{CoarseState, DeviceState, PowerState, MAIN_ZONE};

pub use musecp_link::{Connector, LinkConfig, LinkError, TcpConnector, DEFAULT_PORT};
