//! Mock hardware and console adapters for integration tests.
//!
//! Records every siren command and console write so tests can assert on
//! the full history without touching real GPIO/UART registers.

use std::collections::VecDeque;

use envmon::app::events::MonitorEvent;
use envmon::app::ports::{ActuatorPort, ConsolePort, EventSink, SensorPort};
use envmon::sensors::SensorSnapshot;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshot returned by the next `read_all` call; mutate between ticks
    /// to script a sensor timeline.
    pub snapshot: SensorSnapshot,
    /// Every siren level commanded, in order.
    pub siren_calls: Vec<bool>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot::default(),
            siren_calls: Vec::new(),
        }
    }

    /// Last commanded siren level (false if never commanded).
    pub fn siren_on(&self) -> bool {
        self.siren_calls.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> SensorSnapshot {
        self.snapshot
    }
}

impl ActuatorPort for MockHardware {
    fn set_siren(&mut self, active: bool) {
        self.siren_calls.push(active);
    }

    fn is_siren_on(&self) -> bool {
        self.siren_on()
    }
}

// ── MockConsole ───────────────────────────────────────────────

pub struct MockConsole {
    input: VecDeque<u8>,
    pub output: String,
}

#[allow(dead_code)]
impl MockConsole {
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: String::new(),
        }
    }

    /// Queue input bytes as if typed on the serial line.
    pub fn type_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Drain and return everything written since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for MockConsole {
    fn poll_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(format!("{:?}", event));
    }
}
