//! Locally tracked processor state
//!
//! Nothing here is ever read back from the device. Each field changes only
//! after the corresponding command was accepted by the transport.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_SOURCES;

/// The only zone this client models
pub const MAIN_ZONE: &str = "Main Zone";

/// Three-valued power property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    Off,
    Standby,
}

impl PowerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
            PowerState::Standby => "STANDBY",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On/off projection of the power property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseState {
    On,
    Off,
}

impl CoarseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseState::On => "on",
            CoarseState::Off => "off",
        }
    }
}

impl fmt::Display for CoarseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last-known state of the processor as assumed by this client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub zone: String,
    /// `None` until a power command has been delivered
    pub power: Option<PowerState>,
    /// `None` until a power command has been delivered
    pub state: Option<CoarseState>,
    pub muted: bool,
    pub current_source: Option<String>,
    pub sources: Vec<String>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self {
            zone: MAIN_ZONE.to_string(),
            power: None,
            state: None,
            muted: false,
            current_source: None,
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.state == Some(CoarseState::On)
    }

    pub fn is_off(&self) -> bool {
        self.state == Some(CoarseState::Off)
    }

    pub(crate) fn set_power(&mut self, power: PowerState) {
        self.power = Some(power);
        self.state = Some(match power {
            PowerState::On => CoarseState::On,
            PowerState::Off | PowerState::Standby => CoarseState::Off,
        });
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DeviceState::new();
        assert_eq!(state.zone, "Main Zone");
        assert_eq!(state.power, None);
        assert_eq!(state.state, None);
        assert!(!state.muted);
        assert_eq!(state.current_source, None);
        assert_eq!(state.sources.len(), 11);
        assert_eq!(state.sources[0], "Disc");
        assert_eq!(state.sources[10], "AUX");
        assert!(!state.is_on());
        assert!(!state.is_off());
    }

    #[test]
    fn test_set_power_updates_coarse_state() {
        let mut state = DeviceState::new();

        state.set_power(PowerState::On);
        assert_eq!(state.power, Some(PowerState::On));
        assert!(state.is_on());

        state.set_power(PowerState::Off);
        assert_eq!(state.power, Some(PowerState::Off));
        assert!(state.is_off());

        state.set_power(PowerState::Standby);
        assert_eq!(state.state, Some(CoarseState::Off));
    }

    #[test]
    fn test_state_strings() {
        assert_eq!(PowerState::On.to_string(), "ON");
        assert_eq!(PowerState::Off.as_str(), "OFF");
        assert_eq!(PowerState::Standby.as_str(), "STANDBY");
        assert_eq!(CoarseState::On.to_string(), "on");
        assert_eq!(CoarseState::Off.as_str(), "off");
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = DeviceState::new();
        state.set_power(PowerState::Standby);
        state.muted = true;

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["power"], "STANDBY");
        assert_eq!(json["state"], "off");
        assert_eq!(json["muted"], true);
        assert!(json["current_source"].is_null());

        let back: DeviceState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
