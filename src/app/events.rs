//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — the shipping firmware logs them
//! to the ESP-IDF console. Alarm *text* on the serial stream is not an
//! event; it goes straight through the console port so the wire format
//! stays byte-exact regardless of which sinks are attached.

use crate::alarm::AlarmKind;

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, Copy)]
pub enum MonitorEvent {
    /// The monitor started and transmitted the startup help menu.
    Started,

    /// An alarm latch set (one per rising edge).
    AlarmRaised(AlarmKind),

    /// An alarm latch cleared (silent on the serial stream).
    AlarmCleared(AlarmKind),
}
