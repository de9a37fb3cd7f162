//! Event sink that forwards every alarm event to the log facade.

use log::{info, warn};

use crate::app::events::AlarmEvent;
use crate::app::ports::EventSink;

#[derive(Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AlarmEvent) {
        match event {
            AlarmEvent::Started => info!("event: started"),
            AlarmEvent::Armed {
                gas,
                over_temp,
                test,
            } => warn!(
                "event: armed (gas={gas}, over_temp={over_temp}, test={test})"
            ),
            AlarmEvent::Disarmed => info!("event: disarmed"),
            AlarmEvent::CodeRejected {
                consecutive_failures,
            } => warn!("event: code rejected ({consecutive_failures} consecutive)"),
            AlarmEvent::LockedOut => warn!("event: locked out"),
            AlarmEvent::LockoutReset => info!("event: lockout reset"),
            AlarmEvent::SecretChanged => info!("event: secret changed"),
        }
    }
}
