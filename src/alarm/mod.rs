//! Alarm state machine — the two per-tick update passes and their state.
//!
//! ```text
//!   SensorSnapshot ──▶ ┌──────────────────────────┐
//!   ButtonFrame   ──▶  │ activation pass           │──▶ siren / indicator
//!                      │ deactivation pass         │
//!   serial console ──▶ │ (shared AlarmContext)     │──▶ invalid / lockout LEDs
//!                      └──────────────────────────┘
//! ```
//!
//! Every tick the activation pass runs first (sensor fusion, arming, blink
//! cadence), then the deactivation pass (button code entry, lockout).  The
//! serial console mutates the same [`AlarmContext`](context::AlarmContext)
//! from its own poll, so both entry paths share one secret, one armed flag,
//! and one failure streak.

pub mod activation;
pub mod code;
pub mod context;
pub mod deactivation;
pub mod lockout;

pub use activation::AlarmActivationEngine;
pub use code::CodeSequence;
pub use context::{AlarmContext, AnnunciatorCommands, ButtonFrame, SensorSnapshot};
pub use deactivation::AlarmDeactivationEngine;
pub use lockout::LockoutCounter;
