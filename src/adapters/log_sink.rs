//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured monitor events to the
//! `log` facade (ESP-IDF logger → UART / USB-CDC in production). Alarm
//! raises log at warn so they stand out in a scrollback; clears and
//! lifecycle events log at info.

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the system logger.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started => {
                info!("START | help menu transmitted, entering polling loop");
            }
            MonitorEvent::AlarmRaised(kind) => {
                warn!("ALARM | raised: {}", kind);
            }
            MonitorEvent::AlarmCleared(kind) => {
                info!("ALARM | cleared: {}", kind);
            }
        }
    }
}
