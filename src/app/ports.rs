//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, the siren, the serial console, event sinks)
//! implement these traits. The
//! [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::sensors::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
///
/// Reads are infallible by design — there is no detectable failure mode on
/// an analog channel or a digital level, so the port has no error type.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the siren line.
pub trait ActuatorPort {
    /// Drive the siren output (true = active/high).
    fn set_siren(&mut self, active: bool);

    /// Query the last commanded siren level.
    fn is_siren_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: domain ↔ serial stream)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented serial console.
///
/// Writes are **fire-and-forget**: the underlying transport may buffer or
/// block briefly, but no backpressure or error is surfaced to the domain —
/// an adapter swallows transport failures. This makes the original
/// blocking/non-blocking ambiguity of the serial write explicit.
pub trait ConsolePort {
    /// Take at most one pending input byte, non-blocking.
    fn poll_byte(&mut self) -> Option<u8>;

    /// Queue text for transmission. Must not block indefinitely.
    fn write_str(&mut self, s: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured
/// [`MonitorEvent`](super::events::MonitorEvent)s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}
