//! Inbound console commands.
//!
//! The serial console speaks single ASCII bytes; each recognized byte maps
//! to exactly one readout. Parsing is case-insensitive and stateless —
//! there is no mode, prefix, or multi-byte sequence.

/// Commands the serial console accepts, one byte each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// 'a' — potentiometer raw normalized value.
    PotRaw,
    /// 'b' — LM35 raw normalized value.
    Lm35Raw,
    /// 'c' — temperature in Celsius.
    TempCelsius,
    /// 'd' — temperature in Fahrenheit.
    TempFahrenheit,
    /// 'e' — temperature plus pot pseudo-temperature, Celsius.
    Combined,
    /// 'f' — temperature plus pot pseudo-temperature, Fahrenheit.
    CombinedFahrenheit,
    /// 'g' — gas sensor status.
    GasStatus,
}

impl ConsoleCommand {
    /// Decode one byte, case-insensitively. `None` means unrecognized and
    /// the caller re-emits the help menu instead of a reading.
    ///
    /// Note that 'q', although advertised in the help text, is not mapped —
    /// it falls through to the help menu like any other unknown byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_lowercase() {
            b'a' => Some(Self::PotRaw),
            b'b' => Some(Self::Lm35Raw),
            b'c' => Some(Self::TempCelsius),
            b'd' => Some(Self::TempFahrenheit),
            b'e' => Some(Self::Combined),
            b'f' => Some(Self::CombinedFahrenheit),
            b'g' => Some(Self::GasStatus),
            _ => None,
        }
    }
}
