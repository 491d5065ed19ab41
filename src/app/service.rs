//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the alarm latches and the last sensor snapshot.
//! It exposes a clean, hardware-agnostic API. All I/O flows through port
//! traits injected at call sites, making the entire service testable with
//! mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     MonitorService      │
//! ActuatorPort ◀──│  latches · dispatcher   │──▶ ConsolePort
//!                 └────────────────────────┘
//! ```

use crate::alarm::{AlarmKind, AlarmLatches};
use crate::config::SystemConfig;
use crate::console::{self, GAS_ALARM_TEXT, HELP_TEXT, TEMP_ALARM_TEXT};
use crate::sensors::SensorSnapshot;

use super::commands::ConsoleCommand;
use super::events::MonitorEvent;
use super::ports::{ActuatorPort, ConsolePort, EventSink, SensorPort};

/// The monitor service orchestrates one polling pass at a time.
pub struct MonitorService {
    alarms: AlarmLatches,
    /// Latest snapshot, cached for console replies.
    last: SensorSnapshot,
    tick_count: u64,
}

impl MonitorService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            alarms: AlarmLatches::new(config),
            last: SensorSnapshot::default(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Transmit the startup help menu. Called once before the first tick.
    pub fn start(&mut self, console: &mut impl ConsolePort, sink: &mut impl EventSink) {
        console.write_str(HELP_TEXT);
        sink.emit(&MonitorEvent::Started);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full polling pass: read sensors → evaluate alarms → siren →
    /// service at most one console command.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        console: &mut impl ConsolePort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Read sensors via SensorPort
        self.last = hw.read_all();

        // 2. Alarm evaluation; notifications precede any command reply
        let outcome = self.alarms.evaluate(&self.last);
        if outcome.temp_raised {
            console.write_str(TEMP_ALARM_TEXT);
            sink.emit(&MonitorEvent::AlarmRaised(AlarmKind::Temperature));
        }
        if outcome.temp_cleared {
            sink.emit(&MonitorEvent::AlarmCleared(AlarmKind::Temperature));
        }
        if outcome.gas_raised {
            console.write_str(GAS_ALARM_TEXT);
            sink.emit(&MonitorEvent::AlarmRaised(AlarmKind::Gas));
        }
        if outcome.gas_cleared {
            sink.emit(&MonitorEvent::AlarmCleared(AlarmKind::Gas));
        }

        // 3. Apply the siren command via ActuatorPort
        if let Some(active) = outcome.siren {
            hw.set_siren(active);
        }

        // 4. Service at most one pending console byte
        self.service_console(console);
    }

    /// Consume at most one input byte and answer it.
    ///
    /// An unrecognized byte gets the help menu as the entire output for
    /// the cycle — no reading line is appended.
    fn service_console(&mut self, console: &mut impl ConsolePort) {
        let Some(byte) = console.poll_byte() else {
            return;
        };

        match ConsoleCommand::from_byte(byte) {
            Some(cmd) => {
                let reply = console::reply(cmd, &self.last);
                console.write_str(reply.as_str());
            }
            None => console.write_str(HELP_TEXT),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Latest cached sensor snapshot.
    pub fn last_snapshot(&self) -> &SensorSnapshot {
        &self.last
    }

    /// Total polling ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Current temperature latch state.
    pub fn temp_alarm(&self) -> bool {
        self.alarms.temp_latched()
    }

    /// Current gas latch state.
    pub fn gas_alarm(&self) -> bool {
        self.alarms.gas_latched()
    }
}
