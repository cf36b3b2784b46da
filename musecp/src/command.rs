//! Logical command identifiers and their wire tokens

use std::fmt;
use std::str::FromStr;

use crate::MuseError;

/// Every control action the processor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    PowerOff,
    PowerOn,
    Sleep,
    VolumeUp,
    VolumeDown,
    MuteToggle,
    Play,
    Pause,
    Next,
    Previous,
    /// Takes the source name as its parameter
    Source,
    /// Keep-alive; no effect on the processor
    Heartbeat,
}

impl Command {
    /// All commands in table order
    pub const ALL: [Command; 12] = [
        Command::PowerOff,
        Command::PowerOn,
        Command::Sleep,
        Command::VolumeUp,
        Command::VolumeDown,
        Command::MuteToggle,
        Command::Play,
        Command::Pause,
        Command::Next,
        Command::Previous,
        Command::Source,
        Command::Heartbeat,
    ];

    /// The token placed in the envelope's `<name>` element
    pub fn token(&self) -> &'static str {
        match self {
            Command::PowerOff => "power-off",
            Command::PowerOn => "power-on",
            Command::Sleep => "sleep",
            Command::VolumeUp => "volume-up",
            Command::VolumeDown => "volume-down",
            Command::MuteToggle => "mute-toggle",
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::Source => "source-selection",
            Command::Heartbeat => "heart-alive",
        }
    }

    /// The identifier used by callers that address commands by name
    pub fn name(&self) -> &'static str {
        match self {
            Command::PowerOff => "POWER_OFF",
            Command::PowerOn => "POWER_ON",
            Command::Sleep => "SLEEP",
            Command::VolumeUp => "VOLUME_UP",
            Command::VolumeDown => "VOLUME_DOWN",
            Command::MuteToggle => "MUTE_TOGGLE",
            Command::Play => "PLAY",
            Command::Pause => "PAUSE",
            Command::Next => "NEXT",
            Command::Previous => "PREVIOUS",
            Command::Source => "SOURCE",
            Command::Heartbeat => "HEARTBEAT",
        }
    }
}

impl FromStr for Command {
    type Err = MuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| MuseError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("POWER_OFF", "power-off")]
    #[case("POWER_ON", "power-on")]
    #[case("SLEEP", "sleep")]
    #[case("VOLUME_UP", "volume-up")]
    #[case("VOLUME_DOWN", "volume-down")]
    #[case("MUTE_TOGGLE", "mute-toggle")]
    #[case("PLAY", "play")]
    #[case("PAUSE", "pause")]
    #[case("NEXT", "next")]
    #[case("PREVIOUS", "previous")]
    #[case("SOURCE", "source-selection")]
    #[case("HEARTBEAT", "heart-alive")]
    fn test_command_mapping(#[case] name: &str, #[case] token: &str) {
        let command: Command = name.parse().unwrap();
        assert_eq!(command.token(), token);
        assert_eq!(command.name(), name);
        assert_eq!(command.to_string(), name);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<_> = Command::ALL.iter().map(|c| c.token()).collect();
        assert_eq!(tokens.len(), Command::ALL.len());
    }

    #[rstest]
    #[case("EJECT")]
    #[case("power_on")]
    #[case("")]
    fn test_unknown_command(#[case] name: &str) {
        match name.parse::<Command>() {
            Err(MuseError::UnknownCommand(n)) => assert_eq!(n, name),
            other => panic!("Expected UnknownCommand, got {:?}", other),
        }
    }
}
