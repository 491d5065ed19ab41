//! Siren output driver.
//!
//! A single digital line driving the alarm siren (active HIGH). The gas
//! alarm holds it high for as long as the latch is set; the evaluator
//! commands it low on every gas-absent pass.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct SirenDriver {
    active: bool,
}

impl Default for SirenDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SirenDriver {
    pub fn new() -> Self {
        Self { active: false }
    }

    pub fn set(&mut self, active: bool) {
        hw_init::gpio_write(pins::SIREN_GPIO, active);
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
