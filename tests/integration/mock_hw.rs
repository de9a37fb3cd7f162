//! Mock adapters for integration tests.
//!
//! Record every annunciator call and console write so tests can assert on
//! the full command history without touching real GPIO or UART registers.

use std::collections::VecDeque;

use gasguard::alarm::context::{ButtonFrame, SensorSnapshot};
use gasguard::app::events::AlarmEvent;
use gasguard::app::ports::{AnnunciatorPort, ConsolePort, EventSink, InputFrame, InputPort};

// ── Annunciator call record ───────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnunciatorCall {
    AlarmLed(bool),
    InvalidLed(bool),
    LockoutLed(bool),
    SirenOn,
    SirenOff,
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Frame returned by the next `read()`; set by the test.
    pub frame: InputFrame,
    pub calls: Vec<AnnunciatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            frame: InputFrame::default(),
            calls: Vec::new(),
        }
    }

    pub fn set_buttons(&mut self, buttons: ButtonFrame) {
        self.frame.buttons = buttons;
    }

    pub fn set_sensors(&mut self, sensors: SensorSnapshot) {
        self.frame.sensors = sensors;
    }

    /// Latest commanded level of the alarm LED.
    pub fn alarm_led(&self) -> bool {
        self.latest(|c| match c {
            AnnunciatorCall::AlarmLed(on) => Some(*on),
            AnnunciatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    pub fn invalid_led(&self) -> bool {
        self.latest(|c| match c {
            AnnunciatorCall::InvalidLed(on) => Some(*on),
            AnnunciatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    pub fn lockout_led(&self) -> bool {
        self.latest(|c| match c {
            AnnunciatorCall::LockoutLed(on) => Some(*on),
            AnnunciatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    pub fn siren_sounding(&self) -> bool {
        self.latest(|c| match c {
            AnnunciatorCall::SirenOn => Some(true),
            AnnunciatorCall::SirenOff | AnnunciatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    fn latest(&self, f: impl Fn(&AnnunciatorCall) -> Option<bool>) -> bool {
        self.calls.iter().rev().find_map(f).unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockHardware {
    fn read(&mut self) -> InputFrame {
        self.frame
    }
}

impl AnnunciatorPort for MockHardware {
    fn set_alarm_led(&mut self, on: bool) {
        self.calls.push(AnnunciatorCall::AlarmLed(on));
    }

    fn set_invalid_led(&mut self, on: bool) {
        self.calls.push(AnnunciatorCall::InvalidLed(on));
    }

    fn set_lockout_led(&mut self, on: bool) {
        self.calls.push(AnnunciatorCall::LockoutLed(on));
    }

    fn siren_on(&mut self) {
        self.calls.push(AnnunciatorCall::SirenOn);
    }

    fn siren_off(&mut self) {
        self.calls.push(AnnunciatorCall::SirenOff);
    }

    fn all_off(&mut self) {
        self.calls.push(AnnunciatorCall::AllOff);
    }
}

// ── MockConsole ───────────────────────────────────────────────

/// Serial port double: bytes queued by the test are handed out one per
/// `read_byte`; everything written is captured for assertions.
#[derive(Default)]
pub struct MockConsole {
    pub rx: VecDeque<u8>,
    pub tx: String,
}

#[allow(dead_code)]
impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }
}

impl ConsolePort for MockConsole {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.tx.push_str(text);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AlarmEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event: &AlarmEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AlarmEvent) {
        self.events.push(event.clone());
    }
}
