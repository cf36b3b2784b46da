//! Named actions over the device link, with optimistic local state

use tracing::{debug, error, warn};

use musecp_link::{Connector, DeviceLink, TcpConnector, DEFAULT_PORT};

use crate::{
    Command, CoarseState, DeviceState, MuseError, PowerState, ProcessorConfig, Result, MAIN_ZONE,
};

/// Client for one Acurus Muse processor
///
/// Every action returns `true` only when the transport accepted the
/// command, and only then is the local state updated. A `false` leaves the
/// state untouched; the client stays usable and reconnects on the next
/// action.
///
/// # Example
///
/// ```rust,no_run
/// use musecp::MuseProcessor;
///
/// let mut muse = MuseProcessor::with_port("192.168.1.40", 10025);
/// muse.power_on();
/// muse.volume_up();
/// muse.select_source("Disc");
/// ```
#[derive(Debug)]
pub struct MuseProcessor<C: Connector = TcpConnector> {
    name: Option<String>,
    link: DeviceLink<C>,
    state: DeviceState,
}

impl MuseProcessor<TcpConnector> {
    /// Connect to `host` on the default port
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_port(host, DEFAULT_PORT)
    }

    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            name: None,
            link: DeviceLink::new(host, port, MAIN_ZONE),
            state: DeviceState::new(),
        }
    }

    pub fn from_config(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        let link = DeviceLink::with_config(config.host, config.port, MAIN_ZONE, config.link)?;
        Ok(Self {
            name: config.name,
            link,
            state: DeviceState::new(),
        })
    }
}

impl<C: Connector> MuseProcessor<C> {
    /// Build a processor over a caller-supplied connector
    ///
    /// The connector is responsible for its own socket options;
    /// `config.link` is validated but not applied.
    pub fn with_connector(config: ProcessorConfig, connector: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: config.name,
            link: DeviceLink::with_connector(config.host, config.port, MAIN_ZONE, connector),
            state: DeviceState::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn host(&self) -> &str {
        self.link.host()
    }

    pub fn port(&self) -> u16 {
        self.link.port()
    }

    pub fn zone(&self) -> &str {
        &self.state.zone
    }

    pub fn sources(&self) -> &[String] {
        &self.state.sources
    }

    pub fn current_source(&self) -> Option<&str> {
        self.state.current_source.as_deref()
    }

    /// ON, OFF or STANDBY; `None` before any power command was delivered
    pub fn power(&self) -> Option<PowerState> {
        self.state.power
    }

    /// on or off; `None` before any power command was delivered
    pub fn state(&self) -> Option<CoarseState> {
        self.state.state
    }

    pub fn muted(&self) -> bool {
        self.state.muted
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn is_off(&self) -> bool {
        self.state.is_off()
    }

    /// The whole locally tracked state
    pub fn snapshot(&self) -> &DeviceState {
        &self.state
    }

    /// Replace the advertised source list (not validated, not sent)
    pub fn set_sources(&mut self, sources: Vec<String>) {
        self.state.sources = sources;
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    pub fn link(&self) -> &DeviceLink<C> {
        &self.link
    }

    // ========================================================================
    // Raw commands
    // ========================================================================

    /// Send a command from the table with an optional parameter
    pub fn execute(&mut self, command: Command, param: &str) -> Result<()> {
        debug!("Sending {} ({:?})", command, param);
        self.link.send(command.token(), param)?;
        Ok(())
    }

    /// Send a command addressed by its identifier, e.g. `"POWER_ON"`
    pub fn send_command(&mut self, name: &str, param: &str) -> Result<()> {
        let command: Command = name.parse()?;
        self.execute(command, param)
    }

    fn run(&mut self, command: Command, param: &str, action: &str) -> bool {
        match self.execute(command, param) {
            Ok(()) => true,
            Err(e) => {
                error!("Connection error: {} command not sent. {}", action, e);
                false
            }
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn power_on(&mut self) -> bool {
        if !self.run(Command::PowerOn, "", "power on") {
            return false;
        }
        self.state.set_power(PowerState::On);
        true
    }

    pub fn power_off(&mut self) -> bool {
        if !self.run(Command::PowerOff, "", "power off") {
            return false;
        }
        self.state.set_power(PowerState::Off);
        true
    }

    pub fn sleep(&mut self) -> bool {
        self.run(Command::Sleep, "", "sleep")
    }

    pub fn volume_up(&mut self) -> bool {
        self.run(Command::VolumeUp, "", "volume up")
    }

    pub fn volume_down(&mut self) -> bool {
        self.run(Command::VolumeDown, "", "volume down")
    }

    /// Absolute volume is not part of the protocol; always `false`
    pub fn set_volume(&mut self, level: f32) -> bool {
        warn!("Setting volume to {} is not supported", level);
        false
    }

    /// Like [`set_volume`](Self::set_volume) but with a typed reason
    pub fn try_set_volume(&mut self, _level: f32) -> Result<()> {
        Err(MuseError::Unsupported("set volume"))
    }

    /// Select an input by name
    ///
    /// The name is sent as-is and is not checked against [`sources`](Self::sources).
    pub fn select_source(&mut self, source: &str) -> bool {
        if !self.run(Command::Source, source, "select source") {
            return false;
        }
        self.state.current_source = Some(source.to_string());
        true
    }

    /// Bring the mute state to `mute`
    ///
    /// The protocol only has a toggle, so nothing is sent when the local
    /// state already matches; that case returns `false`.
    pub fn mute(&mut self, mute: bool) -> bool {
        if self.state.muted == mute {
            debug!("Mute already {}, nothing sent", mute);
            return false;
        }
        if !self.run(Command::MuteToggle, "", "mute") {
            return false;
        }
        self.state.muted = mute;
        true
    }

    pub fn play(&mut self) -> bool {
        self.run(Command::Play, "", "play")
    }

    pub fn pause(&mut self) -> bool {
        self.run(Command::Pause, "", "pause")
    }

    pub fn next_track(&mut self) -> bool {
        self.run(Command::Next, "", "next")
    }

    pub fn previous_track(&mut self) -> bool {
        self.run(Command::Previous, "", "previous")
    }

    /// Keep-alive; also re-establishes a dropped connection
    pub fn heartbeat(&mut self) -> bool {
        self.run(Command::Heartbeat, "", "heartbeat")
    }
}
