//! Polling interval gate.
//!
//! The monitor loop free-runs, but its body executes only when the
//! configured interval has elapsed on a monotonic clock. On fire the gate
//! resets to "now" rather than to the ideal next deadline — fixed-period
//! polling, not fixed-rate, so loop overhead accumulates as drift. That
//! matches the hardware timer-reset discipline this gate replaces.

/// Elapsed-time gate for the fixed-period monitor loop.
pub struct PollGate {
    interval_ms: u64,
    last_fire_ms: u64,
}

impl PollGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: u64::from(interval_ms),
            last_fire_ms: 0,
        }
    }

    /// Check the gate against the current monotonic time.
    ///
    /// Returns `true` (and resets) when at least one full interval has
    /// elapsed since the previous fire. Never fires twice for one instant.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fire_ms) >= self.interval_ms {
            self.last_fire_ms = now_ms;
            true
        } else {
            false
        }
    }
}
