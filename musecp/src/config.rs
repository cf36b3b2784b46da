//! Connection settings for a processor

use serde::{Deserialize, Serialize};

use musecp_link::{LinkConfig, DEFAULT_PORT};

use crate::{MuseError, Result};

/// Where the processor lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// IP address or hostname
    pub host: String,

    /// Control port
    /// Default: 10025
    #[serde(default = "default_port")]
    pub port: u16,

    /// Display name; unset unless provided
    #[serde(default)]
    pub name: Option<String>,

    /// Socket timeouts and options
    #[serde(default)]
    pub link: LinkConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ProcessorConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            name: None,
            link: LinkConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(MuseError::InvalidConfig("Host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(MuseError::InvalidConfig("Port must be greater than 0".to_string()));
        }

        self.link
            .validate()
            .map_err(|e| MuseError::InvalidConfig(e.to_string()))
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_link(mut self, link: LinkConfig) -> Self {
        self.link = link;
        self
    }
}
