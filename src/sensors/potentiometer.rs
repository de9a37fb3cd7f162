//! Setpoint potentiometer — analog input reported over the console.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the potentiometer ADC channel (initialised by hw_init).
//! On host/test: reads from a static `AtomicU32` (f32 bits) for injection.

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_POT_RAW: AtomicU32 = AtomicU32::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_potentiometer(raw: f32) {
    SIM_POT_RAW.store(raw.to_bits(), Ordering::Relaxed);
}

pub struct Potentiometer {
    _adc_gpio: i32,
}

impl Potentiometer {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    /// Normalised wiper position, 0.0 – 1.0.
    pub fn read(&self) -> f32 {
        self.read_adc()
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> f32 {
        hw_init::adc1_read_fraction(hw_init::ADC1_CH_POT)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> f32 {
        f32::from_bits(SIM_POT_RAW.load(Ordering::Relaxed))
    }
}
