//! Alarm evaluator.
//!
//! Runs **every polling tick before the console is serviced** and tracks
//! two independent latches, one per alarm condition. A latch sets on the
//! rising edge of its condition and produces exactly one notification per
//! contiguous over-threshold run; it clears as soon as the condition is
//! absent, silently.
//!
//! The two alarms reset differently, and the asymmetry is load-bearing:
//!
//! - **Temperature** clears its latch when the reading drops below the
//!   threshold and does nothing else.
//! - **Gas** clears its latch *and commands the siren inactive on every
//!   gas-absent pass*, not just on the falling edge. The siren is only
//!   commanded active on the rising edge, together with the notification.

use core::fmt;

use crate::config::SystemConfig;
use crate::sensors::SensorSnapshot;

/// The two alarm conditions the monitor tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmKind {
    /// Temperature at or above the configured threshold.
    Temperature,
    /// Gas detected on the active-low digital input.
    Gas,
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature threshold exceeded"),
            Self::Gas => write!(f, "gas detected"),
        }
    }
}

/// Latch transitions and siren command produced by one evaluation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmOutcome {
    /// Temperature latch set this pass (notify once).
    pub temp_raised: bool,
    /// Temperature latch cleared this pass (silent).
    pub temp_cleared: bool,
    /// Gas latch set this pass (notify once, siren on).
    pub gas_raised: bool,
    /// Gas latch cleared this pass (silent).
    pub gas_cleared: bool,
    /// Siren level to command, `None` = leave as-is.
    pub siren: Option<bool>,
}

/// The two latched alarm booleans, owned explicitly rather than hidden in
/// function-local static storage.
pub struct AlarmLatches {
    threshold_c: f32,
    temp: bool,
    gas: bool,
}

impl AlarmLatches {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            threshold_c: config.temp_threshold_c,
            temp: false,
            gas: false,
        }
    }

    /// Evaluate both alarm conditions against the latest snapshot.
    pub fn evaluate(&mut self, snap: &SensorSnapshot) -> AlarmOutcome {
        let mut out = AlarmOutcome::default();

        // ── Temperature ───────────────────────────────────────────
        if snap.temperature_c >= self.threshold_c {
            if !self.temp {
                self.temp = true;
                out.temp_raised = true;
            }
        } else if self.temp {
            self.temp = false;
            out.temp_cleared = true;
        }

        // ── Gas ───────────────────────────────────────────────────
        if snap.gas_detected {
            if !self.gas {
                self.gas = true;
                out.gas_raised = true;
                out.siren = Some(true);
            }
        } else {
            if self.gas {
                out.gas_cleared = true;
            }
            self.gas = false;
            // Commanded low on every absent pass, not only the edge.
            out.siren = Some(false);
        }

        out
    }

    /// Current temperature latch state.
    pub fn temp_latched(&self) -> bool {
        self.temp
    }

    /// Current gas latch state.
    pub fn gas_latched(&self) -> bool {
        self.gas
    }
}
