//! Indicator LEDs — alarm, invalid-code, and lockout.

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::pins;

/// Drives the three panel LEDs.
pub struct IndicatorLeds {
    alarm: bool,
    invalid: bool,
    lockout: bool,
}

impl IndicatorLeds {
    pub fn new() -> Self {
        Self {
            alarm: false,
            invalid: false,
            lockout: false,
        }
    }

    pub fn set_alarm(&mut self, on: bool) {
        if self.alarm != on {
            self.alarm = on;
            Self::write(pins::ALARM_LED_GPIO, on);
        }
    }

    pub fn set_invalid(&mut self, on: bool) {
        if self.invalid != on {
            self.invalid = on;
            Self::write(pins::INVALID_LED_GPIO, on);
        }
    }

    pub fn set_lockout(&mut self, on: bool) {
        if self.lockout != on {
            self.lockout = on;
            Self::write(pins::LOCKOUT_LED_GPIO, on);
        }
    }

    pub fn all_off(&mut self) {
        self.set_alarm(false);
        self.set_invalid(false);
        self.set_lockout(false);
    }

    pub fn alarm_is_on(&self) -> bool {
        self.alarm
    }

    #[cfg(target_os = "espidf")]
    fn write(gpio: i32, on: bool) {
        hw_init::gpio_write(gpio, on);
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(_gpio: i32, _on: bool) {}
}

impl Default for IndicatorLeds {
    fn default() -> Self {
        Self::new()
    }
}
