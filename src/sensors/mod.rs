//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`SensorSnapshot`] each
//! polling tick that the monitor service caches for alarm evaluation and
//! console replies.

pub mod gas;
pub mod potentiometer;
pub mod temperature;

use gas::GasSensor;
use potentiometer::Potentiometer;
use temperature::Lm35Sensor;

/// One polling pass worth of sensor data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Potentiometer wiper, raw normalized [0.0, 1.0].
    pub pot_raw: f32,
    /// LM35 temperature, degrees Celsius.
    pub temperature_c: f32,
    /// True when the gas sensor reports detection (active-low input).
    pub gas_detected: bool,
}

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    pot: Potentiometer,
    lm35: Lm35Sensor,
    gas: GasSensor,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(pot: Potentiometer, lm35: Lm35Sensor, gas: GasSensor) -> Self {
        Self { pot, lm35, gas }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// Reads are treated as infallible: the ADC helpers return an in-range
    /// count and a stuck digital line is indistinguishable from a real
    /// level, so there is no error path out of a polling pass.
    pub fn read_all(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            pot_raw: self.pot.read(),
            temperature_c: self.lm35.read().celsius,
            gas_detected: self.gas.read(),
        }
    }
}
