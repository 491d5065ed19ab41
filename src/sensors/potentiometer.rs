//! Potentiometer input.
//!
//! A plain voltage divider on an ADC channel; the reading is the raw
//! normalized wiper position in [0.0, 1.0]. The console can also present
//! the dial as a pseudo-temperature over a 2–150 °C span for side-by-side
//! display with the LM35.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH0 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

use crate::sensors::temperature::normalise;

#[cfg(not(target_os = "espidf"))]
static SIM_POT_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pot_adc(raw: u16) {
    SIM_POT_ADC.store(raw, Ordering::Relaxed);
}

/// Span of the pseudo-temperature mapping (°C per full dial turn).
const PSEUDO_SPAN_C: f32 = 148.0;
/// Offset of the pseudo-temperature mapping (°C at dial minimum).
const PSEUDO_OFFSET_C: f32 = 2.0;

pub struct Potentiometer {
    _adc_gpio: i32,
}

impl Potentiometer {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    /// Raw normalized wiper position in [0.0, 1.0].
    pub fn read(&self) -> f32 {
        normalise(self.read_adc())
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_POT)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_POT_ADC.load(Ordering::Relaxed)
    }
}

/// Map a normalized wiper position onto the 2–150 °C pseudo-temperature
/// scale used by the combined console readouts.
pub fn pseudo_celsius(raw: f32) -> f32 {
    raw * PSEUDO_SPAN_C + PSEUDO_OFFSET_C
}
