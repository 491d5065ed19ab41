//! MQ-2 gas sensor (digital comparator output).
//!
//! The module's on-board comparator drives the output LOW when gas
//! concentration crosses its trim-pot setpoint, so detection is the
//! logical negation of the pin level. No debouncing is applied.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init.
//! On host/test: reads a static AtomicBool (defaults to HIGH = clean air).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_GAS_LEVEL: AtomicBool = AtomicBool::new(true);

/// Inject the raw pin level (true = HIGH = clean air).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gas_level(high: bool) {
    SIM_GAS_LEVEL.store(high, Ordering::Relaxed);
}

pub struct GasSensor {
    _gpio: i32,
}

impl GasSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// True when gas is present. Active-low pin: LOW level = detected.
    pub fn read(&self) -> bool {
        !self.read_gpio()
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(pins::GAS_GPIO)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        SIM_GAS_LEVEL.load(Ordering::Relaxed)
    }
}
