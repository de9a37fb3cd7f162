//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`SensorSnapshot`] each
//! tick that gets written into `AlarmContext.sensors`.

pub mod gas;
pub mod potentiometer;
pub mod temperature;

use crate::alarm::context::SensorSnapshot;
use gas::GasSensor;
use potentiometer::Potentiometer;
use temperature::TemperatureSensor;

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    pub gas: GasSensor,
    pub temperature: TemperatureSensor,
    pub potentiometer: Potentiometer,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(gas: GasSensor, temperature: TemperatureSensor, potentiometer: Potentiometer) -> Self {
        Self {
            gas,
            temperature,
            potentiometer,
        }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// One temperature sample enters the smoothing window per call, so this
    /// must run exactly once per control tick.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let temp = self.temperature.sample();
        SensorSnapshot {
            gas_active: self.gas.read(),
            temperature_c: temp.celsius,
            over_temp: temp.over_temp,
            potentiometer: self.potentiometer.read(),
        }
    }
}
