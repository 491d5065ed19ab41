//! End-to-end console scenarios: scripted input bytes against scripted
//! sensor readings, asserting on the exact serial reply bytes.

use crate::mock_hw::{MockConsole, MockHardware, RecordingSink};

use envmon::app::service::MonitorService;
use envmon::config::SystemConfig;
use envmon::sensors::temperature::celsius_from_norm;

fn reply_for(input: u8, hw: &mut MockHardware) -> String {
    let config = SystemConfig::default();
    let mut monitor = MonitorService::new(&config);
    let mut console = MockConsole::new();
    let mut sink = RecordingSink::new();

    console.type_bytes(&[input]);
    monitor.tick(hw, &mut console, &mut sink);
    console.take_output()
}

#[test]
fn pot_at_half_scale() {
    let mut hw = MockHardware::new();
    hw.snapshot.pot_raw = 0.50;
    assert_eq!(reply_for(b'a', &mut hw), "Pot: 0.50\r\n");
}

#[test]
fn lm35_raw_round_trips_through_the_scale_factor() {
    let mut hw = MockHardware::new();
    hw.snapshot.temperature_c = celsius_from_norm(0.30);
    assert_eq!(reply_for(b'b', &mut hw), "LM35: 0.30\r\n");
}

#[test]
fn temperature_from_raw_0_30() {
    let mut hw = MockHardware::new();
    hw.snapshot.temperature_c = celsius_from_norm(0.30); // 99.0 °C

    assert_eq!(reply_for(b'c', &mut hw), "Temp: 99.0\u{00b0}C\r\n");
    assert_eq!(reply_for(b'd', &mut hw), "Temp: 210.2\u{00b0}F\r\n");
}

#[test]
fn combined_readouts_scale_the_pot_to_a_pseudo_temperature() {
    let mut hw = MockHardware::new();
    hw.snapshot.temperature_c = 99.0;
    hw.snapshot.pot_raw = 0.5;

    assert_eq!(
        reply_for(b'e', &mut hw),
        "Temp: 99.0\u{00b0}C | Pot: 76.0\u{00b0}C\r\n"
    );
    assert_eq!(
        reply_for(b'f', &mut hw),
        "Temp: 210.2\u{00b0}F | Pot: 168.8\u{00b0}F\r\n"
    );
}

#[test]
fn gas_status_both_ways() {
    let mut hw = MockHardware::new();
    hw.snapshot.gas_detected = false;
    assert_eq!(reply_for(b'g', &mut hw), "Gas: SAFE\r\n");

    // A detected reading also raises the alarm on the same tick; the
    // status line is the tail of the output.
    let mut hw = MockHardware::new();
    hw.snapshot.gas_detected = true;
    let out = reply_for(b'g', &mut hw);
    assert!(out.ends_with("Gas: DETECTED\r\n"));
}

#[test]
fn commands_are_case_insensitive() {
    let mut hw = MockHardware::new();
    hw.snapshot.pot_raw = 0.50;
    assert_eq!(reply_for(b'A', &mut hw), "Pot: 0.50\r\n");
}
