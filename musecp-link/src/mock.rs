//! Scripted connector for exercising the recovery paths without a device
//!
//! Connect attempts and writes follow queued scripts; once a script is
//! exhausted the connector falls back to its reachability flag and writes
//! are accepted in full. Every accepted payload is recorded.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Connector;

/// What the next `write` on a mock stream does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Accept the whole buffer and record it
    Accept,
    /// Report zero bytes accepted
    Zero,
    /// Fail with the given error kind (e.g. `BrokenPipe`)
    Fail(io::ErrorKind),
}

#[derive(Debug, Default)]
struct MockState {
    reachable: bool,
    connect_script: VecDeque<Option<io::ErrorKind>>,
    write_script: VecDeque<WriteOutcome>,
    connect_attempts: usize,
    sent: Vec<Vec<u8>>,
}

/// Connector whose behaviour is scripted by the test
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockConnector {
    /// Every unscripted connect succeeds
    pub fn reachable() -> Self {
        let connector = Self::default();
        connector.set_reachable(true);
        connector
    }

    /// Every unscripted connect is refused
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.state.lock().reachable = reachable;
    }

    /// Queue a failing connect attempt
    pub fn fail_next_connect(&self, kind: io::ErrorKind) {
        self.state.lock().connect_script.push_back(Some(kind));
    }

    /// Queue a succeeding connect attempt
    pub fn succeed_next_connect(&self) {
        self.state.lock().connect_script.push_back(None);
    }

    /// Queue the outcome of the next write on any stream from this connector
    pub fn push_write(&self, outcome: WriteOutcome) {
        self.state.lock().write_script.push_back(outcome);
    }

    pub fn connect_attempts(&self) -> usize {
        self.state.lock().connect_attempts
    }

    /// Payloads accepted so far, in order
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().sent.clone()
    }

    pub fn sent_count(&self) -> usize {
        self.state.lock().sent.len()
    }

    pub fn sent_strings(&self) -> Vec<String> {
        self.state
            .lock()
            .sent
            .iter()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .collect()
    }
}

impl Connector for MockConnector {
    type Stream = MockStream;

    fn connect(&self, host: &str, port: u16) -> io::Result<MockStream> {
        let mut state = self.state.lock();
        state.connect_attempts += 1;

        let failure = match state.connect_script.pop_front() {
            Some(scripted) => scripted,
            None if state.reachable => None,
            None => Some(io::ErrorKind::ConnectionRefused),
        };

        match failure {
            Some(kind) => Err(io::Error::new(kind, format!("mock connect to {}:{}", host, port))),
            None => Ok(MockStream {
                state: Arc::clone(&self.state),
            }),
        }
    }
}

/// Stream handed out by [`MockConnector`]
#[derive(Debug)]
pub struct MockStream {
    state: Arc<Mutex<MockState>>,
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        match state.write_script.pop_front().unwrap_or(WriteOutcome::Accept) {
            WriteOutcome::Accept => {
                state.sent.push(buf.to_vec());
                Ok(buf.len())
            }
            WriteOutcome::Zero => Ok(0),
            WriteOutcome::Fail(kind) => Err(io::Error::from(kind)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
