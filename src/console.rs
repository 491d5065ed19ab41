//! Console text: help menu, alarm lines, and command replies.
//!
//! Every line the monitor puts on the serial stream is built here, CRLF
//! terminated, so the wire format has a single home. Replies are formatted
//! into a fixed-capacity [`heapless::String`] — no allocation on the reply
//! path, mirroring the stack buffer a UART console would use.

use core::fmt::Write;

use heapless::String;

use crate::app::commands::ConsoleCommand;
use crate::sensors::potentiometer::pseudo_celsius;
use crate::sensors::temperature::{celsius_to_fahrenheit, LM35_SCALE_C};
use crate::sensors::SensorSnapshot;

/// Reply buffer capacity. The longest steady-state reply is the combined
/// Fahrenheit line at well under half this.
pub const REPLY_CAP: usize = 128;

/// Help menu, sent once at startup and again on any unrecognized byte.
///
/// The final line advertises a 'q' command that the dispatcher does not
/// handle; the console has no modes. Kept verbatim from the deployed
/// help screen. TODO: drop the 'q' line or grow a real pager mode.
pub const HELP_TEXT: &str = "\r\nAvailable Commands:\r\n\
a - Potentiometer raw value\r\n\
b - LM35 raw value\r\n\
c - Temperature in \u{00b0}C\r\n\
d - Temperature in \u{00b0}F\r\n\
e - Temp \u{00b0}C + Pot scaled\r\n\
f - Temp \u{00b0}F + Pot scaled\r\n\
g - Gas sensor status\r\n\
Press 'q' in any mode to return\r\n\r\n";

/// One-shot notification on the temperature latch rising edge.
pub const TEMP_ALARM_TEXT: &str = "ALARM: Temperature Threshold Exceeded!\r\n";

/// One-shot notification on the gas latch rising edge.
pub const GAS_ALARM_TEXT: &str = "ALARM: Gas Detected!\r\n";

/// Format the reply for a recognized command from the latest snapshot.
pub fn reply(cmd: ConsoleCommand, snap: &SensorSnapshot) -> String<REPLY_CAP> {
    let mut buf: String<REPLY_CAP> = String::new();
    let temp_c = snap.temperature_c;

    // Capacity is sized for every reachable reply; a formatting overflow
    // would only truncate the line, never panic.
    let _ = match cmd {
        ConsoleCommand::PotRaw => write!(buf, "Pot: {:.2}\r\n", snap.pot_raw),
        ConsoleCommand::Lm35Raw => {
            write!(buf, "LM35: {:.2}\r\n", temp_c / LM35_SCALE_C)
        }
        ConsoleCommand::TempCelsius => {
            write!(buf, "Temp: {:.1}\u{00b0}C\r\n", temp_c)
        }
        ConsoleCommand::TempFahrenheit => {
            write!(buf, "Temp: {:.1}\u{00b0}F\r\n", celsius_to_fahrenheit(temp_c))
        }
        ConsoleCommand::Combined => write!(
            buf,
            "Temp: {:.1}\u{00b0}C | Pot: {:.1}\u{00b0}C\r\n",
            temp_c,
            pseudo_celsius(snap.pot_raw)
        ),
        ConsoleCommand::CombinedFahrenheit => write!(
            buf,
            "Temp: {:.1}\u{00b0}F | Pot: {:.1}\u{00b0}F\r\n",
            celsius_to_fahrenheit(temp_c),
            celsius_to_fahrenheit(pseudo_celsius(snap.pot_raw))
        ),
        ConsoleCommand::GasStatus => write!(
            buf,
            "Gas: {}\r\n",
            if snap.gas_detected { "DETECTED" } else { "SAFE" }
        ),
    };

    buf
}
