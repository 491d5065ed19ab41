//! Integration tests for the MonitorService → alarm → siren pipeline.
//!
//! These run on the host (x86_64) and verify the full polling pass from a
//! scripted sensor timeline down to siren commands and serial output.

use crate::mock_hw::{MockConsole, MockHardware, RecordingSink};

use envmon::app::ports::ActuatorPort;
use envmon::app::service::MonitorService;
use envmon::config::SystemConfig;
use envmon::console::{GAS_ALARM_TEXT, HELP_TEXT, TEMP_ALARM_TEXT};

fn make_monitor() -> (MonitorService, MockHardware, MockConsole, RecordingSink) {
    let config = SystemConfig::default();
    (
        MonitorService::new(&config),
        MockHardware::new(),
        MockConsole::new(),
        RecordingSink::new(),
    )
}

// ── Startup ──────────────────────────────────────────────────

#[test]
fn startup_transmits_help_menu_once() {
    let (mut monitor, _hw, mut console, mut sink) = make_monitor();

    monitor.start(&mut console, &mut sink);

    assert_eq!(console.take_output(), HELP_TEXT);
    assert_eq!(sink.events.len(), 1);
    assert!(sink.events[0].contains("Started"));
}

// ── Temperature alarm ────────────────────────────────────────

#[test]
fn temp_alarm_notifies_once_per_crossing() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    hw.snapshot.temperature_c = 55.0;
    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), TEMP_ALARM_TEXT);
    assert!(monitor.temp_alarm());

    // Still over threshold: silent.
    for _ in 0..4 {
        monitor.tick(&mut hw, &mut console, &mut sink);
    }
    assert_eq!(console.take_output(), "");

    // Drops below: latch clears with no serial output.
    hw.snapshot.temperature_c = 20.0;
    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), "");
    assert!(!monitor.temp_alarm());

    // Second crossing notifies again.
    hw.snapshot.temperature_c = 50.0;
    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), TEMP_ALARM_TEXT);
}

#[test]
fn temp_alarm_never_touches_the_siren() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    hw.snapshot.temperature_c = 90.0;
    hw.snapshot.gas_detected = false;
    monitor.tick(&mut hw, &mut console, &mut sink);

    // The only siren command comes from the gas-absent path (inactive).
    assert!(hw.siren_calls.iter().all(|&level| !level));
}

// ── Gas alarm ────────────────────────────────────────────────

#[test]
fn gas_alarm_raises_siren_and_notifies_on_transition_only() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    hw.snapshot.gas_detected = true;
    monitor.tick(&mut hw, &mut console, &mut sink);

    assert_eq!(console.take_output(), GAS_ALARM_TEXT);
    assert!(hw.is_siren_on());
    assert!(monitor.gas_alarm());

    // Latched and still detected: no further notification, no siren call.
    let calls_after_raise = hw.siren_calls.len();
    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), "");
    assert_eq!(hw.siren_calls.len(), calls_after_raise);
}

#[test]
fn gas_clear_drives_siren_low_on_every_absent_pass() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    hw.snapshot.gas_detected = true;
    monitor.tick(&mut hw, &mut console, &mut sink);
    assert!(hw.siren_on());

    hw.snapshot.gas_detected = false;
    for _ in 0..3 {
        monitor.tick(&mut hw, &mut console, &mut sink);
    }

    // One active command, then one inactive command per absent pass.
    assert_eq!(hw.siren_calls, vec![true, false, false, false]);
    assert!(!monitor.gas_alarm());
    // Clearing produced no serial output.
    assert_eq!(console.take_output(), "");
}

#[test]
fn alarm_line_precedes_command_reply_in_same_tick() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    // Prime a snapshot so the 'g' reply reflects this tick's reading.
    hw.snapshot.gas_detected = true;
    console.type_bytes(b"g");
    monitor.tick(&mut hw, &mut console, &mut sink);

    let expected = format!("{}Gas: DETECTED\r\n", GAS_ALARM_TEXT);
    assert_eq!(console.take_output(), expected);
}

// ── Structured events ────────────────────────────────────────

#[test]
fn latch_edges_emit_structured_events() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    hw.snapshot.gas_detected = true;
    monitor.tick(&mut hw, &mut console, &mut sink);
    hw.snapshot.gas_detected = false;
    monitor.tick(&mut hw, &mut console, &mut sink);
    monitor.tick(&mut hw, &mut console, &mut sink);

    let raised = sink.events.iter().filter(|e| e.contains("AlarmRaised(Gas)")).count();
    let cleared = sink.events.iter().filter(|e| e.contains("AlarmCleared(Gas)")).count();
    assert_eq!(raised, 1, "one raise edge");
    assert_eq!(cleared, 1, "one clear edge, not one per absent pass");
}

// ── Console servicing ────────────────────────────────────────

#[test]
fn one_byte_serviced_per_tick() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();
    hw.snapshot.pot_raw = 0.25;
    hw.snapshot.temperature_c = 33.0;

    console.type_bytes(b"ac");

    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), "Pot: 0.25\r\n");

    monitor.tick(&mut hw, &mut console, &mut sink);
    assert_eq!(console.take_output(), "Temp: 33.0\u{00b0}C\r\n");
}

#[test]
fn unrecognized_byte_gets_help_and_nothing_else() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();
    hw.snapshot.pot_raw = 0.75;

    console.type_bytes(b"x");
    monitor.tick(&mut hw, &mut console, &mut sink);

    assert_eq!(console.take_output(), HELP_TEXT);
}

#[test]
fn advertised_q_falls_through_to_help() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    console.type_bytes(b"q");
    monitor.tick(&mut hw, &mut console, &mut sink);

    assert_eq!(console.take_output(), HELP_TEXT);
}

#[test]
fn idle_tick_produces_no_output() {
    let (mut monitor, mut hw, mut console, mut sink) = make_monitor();

    monitor.tick(&mut hw, &mut console, &mut sink);

    assert_eq!(console.take_output(), "");
    assert_eq!(monitor.tick_count(), 1);
}
