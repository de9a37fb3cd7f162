//! System configuration parameters
//!
//! All tunable parameters for the GasGuard alarm panel. The defaults match
//! the legacy panel firmware; there is no persistent storage, so every boot
//! starts from these values.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    // --- Temperature ---
    /// Averaged temperature (Celsius) above which the over-temp hazard trips
    pub over_temp_threshold_c: f32,

    // --- Indicator blink cadence ---
    /// Alarm indicator blink period when only gas is detected (ms)
    pub blink_gas_ms: u32,
    /// Alarm indicator blink period when only over-temp is detected (ms)
    pub blink_over_temp_ms: u32,
    /// Alarm indicator blink period when both hazards are active (ms)
    pub blink_both_ms: u32,

    // --- Deactivation ---
    /// Consecutive failed code attempts before the panel locks out
    pub lockout_threshold: u8,
    /// Inactivity timeout for serial code entry before the console
    /// abandons the attempt and returns to the command dispatcher (ms)
    pub code_entry_timeout_ms: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub tick_interval_ms: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            over_temp_threshold_c: 50.0,

            // Combined-hazard cadence is the shortest (most urgent);
            // single-hazard cadences distinguish failure type by blink speed.
            blink_gas_ms: 1000,
            blink_over_temp_ms: 500,
            blink_both_ms: 100,

            lockout_threshold: 5,
            code_entry_timeout_ms: 10_000,

            tick_interval_ms: 10,
        }
    }
}

impl AlarmConfig {
    /// Number of serial-console polls a pending code entry survives with no
    /// incoming byte before it is abandoned.
    pub fn code_entry_timeout_ticks(&self) -> u32 {
        (self.code_entry_timeout_ms / self.tick_interval_ms).max(1)
    }
}
