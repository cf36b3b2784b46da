//! Socket configuration for the device link

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::LinkError;

/// Timeouts and socket options applied to every connection the link opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Maximum time to wait for the TCP handshake.
    /// `None` blocks for the operating system default.
    /// Default: 5 seconds
    pub connect_timeout: Option<Duration>,

    /// Maximum time a single write may block.
    /// Default: 10 seconds
    pub write_timeout: Option<Duration>,

    /// Disable Nagle so each command leaves immediately
    pub nodelay: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(5)),
            write_timeout: Some(Duration::from_secs(10)),
            nodelay: true,
        }
    }
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rely entirely on the operating system's blocking behaviour
    pub fn no_timeouts() -> Self {
        Self {
            connect_timeout: None,
            write_timeout: None,
            ..Default::default()
        }
    }

    /// Validate the configuration before sockets are created
    ///
    /// Zero durations are rejected by `std::net` at use time, so they are
    /// refused here instead.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.connect_timeout == Some(Duration::ZERO) {
            return Err(LinkError::InvalidConfig(
                "Connect timeout must be greater than 0".to_string(),
            ));
        }

        if self.write_timeout == Some(Duration::ZERO) {
            return Err(LinkError::InvalidConfig(
                "Write timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.write_timeout, Some(Duration::from_secs(10)));
        assert!(config.nodelay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_timeouts() {
        let config = LinkConfig::no_timeouts();
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.write_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let zero_connect = LinkConfig::new().with_connect_timeout(Some(Duration::ZERO));
        assert!(matches!(zero_connect.validate(), Err(LinkError::InvalidConfig(_))));

        let zero_write = LinkConfig::new().with_write_timeout(Some(Duration::ZERO));
        assert!(matches!(zero_write.validate(), Err(LinkError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LinkConfig = serde_json::from_str(r#"{"nodelay": false}"#).unwrap();
        assert!(!config.nodelay);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
    }
}
