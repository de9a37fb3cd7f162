//! Application layer — the hexagon's core.
//!
//! Ports ([`ports`]) define what the domain needs from the outside world;
//! the service ([`service`]) orchestrates the alarm update passes; events
//! ([`events`]) are the domain's outbound notifications.

pub mod events;
pub mod ports;
pub mod service;

pub use events::AlarmEvent;
pub use ports::{AnnunciatorPort, ConsolePort, EventSink, InputFrame, InputPort};
pub use service::AlarmService;
