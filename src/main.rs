//! GasGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-interval control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter       UartConsole      LogEventSink     │
//! │  (Input+Annunciator)   (ConsolePort)    (EventSink)      │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AlarmService (pure logic)               │  │
//! │  │  Activation · Deactivation · Serial console        │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use gasguard::adapters::{HardwareAdapter, LogEventSink, UartConsole};
use gasguard::app::AlarmService;
use gasguard::config::AlarmConfig;
use gasguard::drivers;
use gasguard::pins;
use gasguard::sensors::gas::GasSensor;
use gasguard::sensors::potentiometer::Potentiometer;
use gasguard::sensors::temperature::TemperatureSensor;
use gasguard::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("GasGuard v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = drivers::hw_init::init() {
        // Peripheral init failure is critical — log and halt; the
        // watchdog resets us after timeout.
        log::error!("HAL init failed: {e} — halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = AlarmConfig::default();
    let tick_ms = config.tick_interval_ms;

    let sensors = SensorHub::new(
        GasSensor::new(pins::GAS_SENSOR_GPIO),
        TemperatureSensor::new(pins::TEMP_ADC_GPIO, config.over_temp_threshold_c),
        Potentiometer::new(pins::POT_ADC_GPIO),
    );
    let mut hardware = HardwareAdapter::new(sensors);
    let mut console = UartConsole::new()?;
    let mut sink = LogEventSink;

    // ── 3. Control loop ───────────────────────────────────────
    let mut service = AlarmService::new(config);
    service.start(&mut sink);

    loop {
        service.tick(&mut hardware, &mut console, &mut sink);
        esp_idf_hal::delay::FreeRtos::delay_ms(tick_ms);
    }
}
