//! LM35 analog temperature sensor.
//!
//! The LM35 outputs 10 mV/°C; on a 3.3 V reference the full normalized ADC
//! range therefore spans 330 °C, so Celsius is simply the normalized sample
//! times 330. The linear response is nominally 0–100 °C but the read path
//! itself does not clamp.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

/// Full-scale Celsius span of the normalized ADC range (3.3 V × 100 °C/V).
pub const LM35_SCALE_C: f32 = 330.0;

const ADC_MAX: f32 = 4095.0;

#[derive(Debug, Clone, Copy)]
pub struct Lm35Reading {
    /// Normalized sample in [0.0, 1.0].
    pub raw: f32,
    pub celsius: f32,
}

pub struct Lm35Sensor {
    _adc_gpio: i32,
}

impl Lm35Sensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    pub fn read(&self) -> Lm35Reading {
        let raw = normalise(self.read_adc());
        Lm35Reading {
            raw,
            celsius: celsius_from_norm(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_TEMP)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }
}

/// Scale a 12-bit ADC count into [0.0, 1.0].
pub fn normalise(raw: u16) -> f32 {
    f32::from(raw.min(4095)) / ADC_MAX
}

/// LM35 conversion: normalized sample → degrees Celsius.
pub fn celsius_from_norm(norm: f32) -> f32 {
    norm * LM35_SCALE_C
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
