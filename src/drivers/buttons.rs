//! Panel button bank — Enter, Test, and the four code buttons A–D.
//!
//! Buttons are wired pressed-high with pull-downs; no debouncing is done
//! here.  The 10 ms control tick plus the invalid-indicator acknowledge
//! flow makes contact bounce harmless for this panel.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: samples the GPIO levels.  On host/test: reads a static
//! bitmask settable via [`sim_set_buttons`].

use crate::alarm::context::ButtonFrame;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::pins;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_BUTTONS: AtomicU8 = AtomicU8::new(0);

/// Bit positions in the simulation mask.
#[cfg(not(target_os = "espidf"))]
pub mod sim_bits {
    pub const ENTER: u8 = 1 << 0;
    pub const TEST: u8 = 1 << 1;
    pub const A: u8 = 1 << 2;
    pub const B: u8 = 1 << 3;
    pub const C: u8 = 1 << 4;
    pub const D: u8 = 1 << 5;
}

/// Set the simulated button levels (host/test builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_buttons(mask: u8) {
    SIM_BUTTONS.store(mask, Ordering::Relaxed);
}

/// Samples the six panel buttons.
pub struct ButtonBank {
    _enter_gpio: i32,
    _test_gpio: i32,
}

impl ButtonBank {
    pub fn new() -> Self {
        Self {
            _enter_gpio: pins::ENTER_BUTTON_GPIO,
            _test_gpio: pins::TEST_BUTTON_GPIO,
        }
    }

    /// Sample all six buttons into one frame.
    #[cfg(target_os = "espidf")]
    pub fn read(&self) -> ButtonFrame {
        ButtonFrame {
            enter: hw_init::gpio_read(pins::ENTER_BUTTON_GPIO),
            test: hw_init::gpio_read(pins::TEST_BUTTON_GPIO),
            a: hw_init::gpio_read(pins::CODE_A_GPIO),
            b: hw_init::gpio_read(pins::CODE_B_GPIO),
            c: hw_init::gpio_read(pins::CODE_C_GPIO),
            d: hw_init::gpio_read(pins::CODE_D_GPIO),
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&self) -> ButtonFrame {
        let mask = SIM_BUTTONS.load(Ordering::Relaxed);
        ButtonFrame {
            enter: mask & sim_bits::ENTER != 0,
            test: mask & sim_bits::TEST != 0,
            a: mask & sim_bits::A != 0,
            b: mask & sim_bits::B != 0,
            c: mask & sim_bits::C != 0,
            d: mask & sim_bits::D != 0,
        }
    }
}

impl Default for ButtonBank {
    fn default() -> Self {
        Self::new()
    }
}
