//! Adapters — concrete implementations of the application ports.

pub mod hardware;
pub mod log_sink;
#[cfg(target_os = "espidf")]
pub mod serial;

pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
#[cfg(target_os = "espidf")]
pub use serial::UartConsole;
