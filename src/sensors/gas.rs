//! MQ-2 gas detector — digital comparator output.
//!
//! The detector board pulls its digital line LOW when the measured gas
//! concentration crosses its on-board trim threshold, so the line is
//! active-low: asserted (low) = gas present.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the GPIO level (initialised by hw_init).
//! On host/test: reads from a static `AtomicBool` for injection.

use core::sync::atomic::AtomicBool;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_GAS_DETECTED: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gas_detected(detected: bool) {
    SIM_GAS_DETECTED.store(detected, Ordering::Relaxed);
}

pub struct GasSensor {
    _gpio: i32,
}

impl GasSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// `true` when gas is currently being detected.
    pub fn read(&self) -> bool {
        self.read_line_active()
    }

    #[cfg(target_os = "espidf")]
    fn read_line_active(&self) -> bool {
        // Active-low: a low level means the comparator has tripped.
        !hw_init::gpio_read(self._gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_line_active(&self) -> bool {
        SIM_GAS_DETECTED.load(Ordering::Relaxed)
    }
}
