//! EnvMon Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-period polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  HardwareAdapter      SerialConsole      LogEventSink      │
//! │  (Sensor+Actuator)    (ConsolePort)      (EventSink)       │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ──────────────────     │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │           MonitorService (pure logic)            │      │
//! │  │  alarm latches · command dispatcher              │      │
//! │  └──────────────────────────────────────────────────┘      │
//! │                                                            │
//! │  PollGate (200 ms fire-only-when-due) · Watchdog           │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use envmon::adapters::hardware::HardwareAdapter;
use envmon::adapters::log_sink::LogEventSink;
use envmon::adapters::serial::SerialConsole;
use envmon::adapters::time::UptimeClock;
use envmon::app::service::MonitorService;
use envmon::config::SystemConfig;
use envmon::drivers::hw_init;
use envmon::drivers::siren::SirenDriver;
use envmon::drivers::watchdog::Watchdog;
use envmon::pins;
use envmon::poll::PollGate;
use envmon::sensors::gas::GasSensor;
use envmon::sensors::potentiometer::Potentiometer;
use envmon::sensors::temperature::Lm35Sensor;
use envmon::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("╔══════════════════════════════════════╗");
    info!("║  EnvMon v{}                         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();

    // ── 2. Initialise hardware peripherals ────────────────────
    hw_init::init_peripherals(config.serial_baud)?;

    // Wedged = dozens of consecutive missed polling periods.
    let watchdog = Watchdog::new(config.poll_interval_ms * 50);

    // ── 3. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        Potentiometer::new(pins::POT_ADC_GPIO),
        Lm35Sensor::new(pins::TEMP_ADC_GPIO),
        GasSensor::new(pins::GAS_GPIO),
    );
    let mut hw = HardwareAdapter::new(sensor_hub, SirenDriver::new());
    let mut console = SerialConsole::new();
    let mut sink = LogEventSink::new();

    // ── 4. Construct the monitor service ──────────────────────
    let mut monitor = MonitorService::new(&config);

    // Help menu goes out once before the first polling pass.
    monitor.start(&mut console, &mut sink);

    info!("System ready. Entering polling loop.");

    // ── 5. Polling loop ───────────────────────────────────────
    //
    // Free-running, gated by elapsed time: the body executes only when a
    // full interval has accumulated, then the gate resets to "now".
    let clock = UptimeClock::new();
    let mut gate = PollGate::new(config.poll_interval_ms);

    loop {
        if gate.poll(clock.uptime_ms()) {
            monitor.tick(&mut hw, &mut console, &mut sink);
        }

        // Feed on every iteration, not just on fires.
        watchdog.feed();

        // Yield briefly so the busy-wait does not starve the IDLE task.
        #[cfg(target_os = "espidf")]
        unsafe {
            esp_idf_svc::sys::vTaskDelay(1);
        }
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
