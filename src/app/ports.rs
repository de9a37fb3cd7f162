//! Port traits — the hexagonal boundary between alarm logic and the pins.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService (domain)
//! ```
//!
//! Driven adapters (the button/sensor bank, the annunciator bank, the UART,
//! event sinks) implement these traits.  The
//! [`AlarmService`](super::service::AlarmService) consumes them via
//! generics, so the alarm core never touches hardware directly and every
//! port is mockable in tests.

use crate::alarm::context::{ButtonFrame, SensorSnapshot};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Everything the controller samples at the start of a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub buttons: ButtonFrame,
    pub sensors: SensorSnapshot,
}

/// Read-side port: the domain calls this once per tick.
pub trait InputPort {
    /// Sample every button and sensor.  Must be called exactly once per
    /// tick: the temperature path feeds a smoothing window per read.
    fn read(&mut self) -> InputFrame;
}

// ───────────────────────────────────────────────────────────────
// Annunciator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive LEDs and the siren.
pub trait AnnunciatorPort {
    /// Alarm indicator LED (blinks at the hazard cadence while armed).
    fn set_alarm_led(&mut self, on: bool);

    /// Invalid-code indicator LED.
    fn set_invalid_led(&mut self, on: bool);

    /// Lockout indicator LED.
    fn set_lockout_led(&mut self, on: bool);

    /// Drive the open-drain siren pin low (sounding).
    fn siren_on(&mut self);

    /// Float the siren pin (silent).
    fn siren_off(&mut self);

    /// Kill all annunciators — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: domain ↔ serial byte stream)
// ───────────────────────────────────────────────────────────────

/// Byte-level serial access for the command console.
///
/// `read_byte` must never block: the console state machine is advanced at
/// most one byte per tick and a stalled peer must not stall the tick loop.
pub trait ConsolePort {
    /// Next received byte, if one is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Queue a response fragment for transmission.
    fn write(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AlarmEvent`](super::events::AlarmEvent)s
/// through this port.  Adapters decide where they go (serial log, test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AlarmEvent);
}
