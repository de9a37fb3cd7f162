//! Outbound application events.
//!
//! The [`AlarmService`](super::service::AlarmService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, record in tests, etc.

use serde::Serialize;

/// Structured events emitted by the alarm core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AlarmEvent {
    /// The service has started ticking.
    Started,

    /// The alarm armed (carries which hazards contributed).
    Armed {
        gas: bool,
        over_temp: bool,
        test: bool,
    },

    /// A code entry was accepted and the alarm disarmed.
    Disarmed,

    /// A code entry was rejected (button or serial path).
    CodeRejected { consecutive_failures: u8 },

    /// The failure streak reached the threshold; the panel is locked.
    LockedOut,

    /// An administrative reset cleared the lockout.
    LockoutReset,

    /// The stored secret sequence was replaced over the console.
    SecretChanged,
}
