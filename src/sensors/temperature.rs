//! LM35 temperature sensor (10 mV/°C linear analog output).
//!
//! Each tick one raw reading (0.0 – 1.0 ADC fraction) enters a fixed-size
//! ring buffer; the smoothed value is the arithmetic mean over the **whole**
//! window scaled through the LM35 formula `celsius = raw * 3.3 / 0.01`.
//!
//! The mean deliberately includes the zero-initialised slots during the
//! first fill cycle, reproducing the legacy panel's start-up behavior: the
//! averaged temperature ramps up from zero over the first 100 samples.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the LM35 ADC channel (initialised by hw_init).
//! On host/test: reads from a static `AtomicU32` (f32 bits) for injection.

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_TEMP_RAW: AtomicU32 = AtomicU32::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temperature_raw(raw: f32) {
    SIM_TEMP_RAW.store(raw.to_bits(), Ordering::Relaxed);
}

/// Samples held in the smoothing window.
pub const AVG_WINDOW: usize = 100;

/// ADC full-scale reference voltage.
const V_REF: f32 = 3.3;
/// LM35 output slope: 10 mV per degree Celsius.
const VOLTS_PER_DEG_C: f32 = 0.01;

/// `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Clone, Copy)]
pub struct TemperatureReading {
    /// Raw ADC fraction fed into the window this tick.
    pub raw: f32,
    /// Window-averaged temperature in Celsius.
    pub celsius: f32,
    /// True if `celsius` exceeds the configured threshold.
    pub over_temp: bool,
}

/// Fixed-window smoothing of raw LM35 readings.
///
/// Owns the ring buffer exclusively; callers only see the averaged Celsius
/// value and the over-threshold comparison.
pub struct TemperatureAverager {
    ring: [f32; AVG_WINDOW],
    head: usize,
    threshold_c: f32,
    last_celsius: f32,
}

impl TemperatureAverager {
    pub fn new(over_temp_threshold_c: f32) -> Self {
        Self {
            ring: [0.0; AVG_WINDOW],
            head: 0,
            threshold_c: over_temp_threshold_c,
            last_celsius: 0.0,
        }
    }

    /// Push one raw reading and return the refreshed window average in
    /// Celsius.  The oldest slot is overwritten; the mean always spans all
    /// `AVG_WINDOW` slots (zero-filled before the first wrap).
    pub fn add_sample(&mut self, raw: f32) -> f32 {
        self.ring[self.head] = raw;
        self.head = (self.head + 1) % AVG_WINDOW;

        let sum: f32 = self.ring.iter().sum();
        let mean = sum / AVG_WINDOW as f32;
        self.last_celsius = mean * V_REF / VOLTS_PER_DEG_C;
        self.last_celsius
    }

    /// Last computed window average in Celsius.
    pub fn celsius(&self) -> f32 {
        self.last_celsius
    }

    /// Whether the last average exceeds the over-temperature threshold.
    pub fn is_over_threshold(&self) -> bool {
        self.last_celsius > self.threshold_c
    }
}

/// ADC-backed LM35 driver wrapping the averager.
pub struct TemperatureSensor {
    averager: TemperatureAverager,
    _adc_gpio: i32,
}

impl TemperatureSensor {
    pub fn new(adc_gpio: i32, over_temp_threshold_c: f32) -> Self {
        Self {
            averager: TemperatureAverager::new(over_temp_threshold_c),
            _adc_gpio: adc_gpio,
        }
    }

    /// Read the ADC, fold the sample into the window, and report.
    pub fn sample(&mut self) -> TemperatureReading {
        let raw = self.read_adc();
        let celsius = self.averager.add_sample(raw);
        TemperatureReading {
            raw,
            celsius,
            over_temp: self.averager.is_over_threshold(),
        }
    }

    /// Last averaged Celsius value without taking a new sample.
    pub fn celsius(&self) -> f32 {
        self.averager.celsius()
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> f32 {
        hw_init::adc1_read_fraction(hw_init::ADC1_CH_TEMP)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> f32 {
        f32::from_bits(SIM_TEMP_RAW.load(Ordering::Relaxed))
    }
}
