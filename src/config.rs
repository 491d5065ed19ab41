//! System configuration parameters
//!
//! All tunable parameters for the EnvMon monitor loop. There is no config
//! file, NVS store, or provisioning channel — these are compile-time
//! defaults, grouped in one struct so the thresholds have a single home.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Alarms ---
    /// Temperature (Celsius) at or above which the temperature alarm latches.
    pub temp_threshold_c: f32,

    // --- Timing ---
    /// Sensor polling interval (milliseconds).
    pub poll_interval_ms: u32,

    // --- Console ---
    /// UART console baud rate.
    pub serial_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            temp_threshold_c: 50.0,
            poll_interval_ms: 200, // 5 Hz
            serial_baud: 115_200,
        }
    }
}
