//! Siren driver — open-drain output.
//!
//! The pin floats (pulled high externally) while silent and is driven low
//! to sound the siren.  Open-drain means a disconnected controller fails
//! silent rather than wailing.

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

pub struct SirenDriver {
    sounding: bool,
}

impl SirenDriver {
    pub fn new() -> Self {
        Self { sounding: false }
    }

    pub fn on(&mut self) {
        if !self.sounding {
            self.sounding = true;
            self.write(true);
        }
    }

    pub fn off(&mut self) {
        if self.sounding {
            self.sounding = false;
            self.write(false);
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    // Pin level is inverted: low = sounding.
    #[cfg(target_os = "espidf")]
    fn write(&self, sounding: bool) {
        hw_init::gpio_write(pins::SIREN_GPIO, !sounding);
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(&self, _sounding: bool) {}
}

impl Default for SirenDriver {
    fn default() -> Self {
        Self::new()
    }
}
