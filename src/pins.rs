//! GPIO / peripheral pin assignments for the EnvMon main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Potentiometer wiper — analog voltage, full ADC range.
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const POT_ADC_GPIO: i32 = 1;

/// LM35 temperature sensor — 10 mV/°C analog output.
/// ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// MQ-2 gas sensor digital comparator output.
/// Active-low: LOW = gas detected, HIGH = clean air.
pub const GAS_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Siren / buzzer enable. Driven HIGH while a gas alarm is active.
pub const SIREN_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// ADC1 channel for the potentiometer.
pub const ADC1_CH_POT: u32 = 0;
/// ADC1 channel for the LM35.
pub const ADC1_CH_TEMP: u32 = 1;
