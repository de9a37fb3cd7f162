//! Hardware adapter — binds the sensor hub and panel drivers to the
//! [`InputPort`] and [`AnnunciatorPort`] traits the service consumes.

use crate::app::ports::{AnnunciatorPort, InputFrame, InputPort};
use crate::drivers::{ButtonBank, IndicatorLeds, SirenDriver};
use crate::sensors::SensorHub;

pub struct HardwareAdapter {
    sensors: SensorHub,
    buttons: ButtonBank,
    leds: IndicatorLeds,
    siren: SirenDriver,
}

impl HardwareAdapter {
    pub fn new(sensors: SensorHub) -> Self {
        Self {
            sensors,
            buttons: ButtonBank::new(),
            leds: IndicatorLeds::new(),
            siren: SirenDriver::new(),
        }
    }
}

impl InputPort for HardwareAdapter {
    fn read(&mut self) -> InputFrame {
        InputFrame {
            buttons: self.buttons.read(),
            sensors: self.sensors.read_all(),
        }
    }
}

impl AnnunciatorPort for HardwareAdapter {
    fn set_alarm_led(&mut self, on: bool) {
        self.leds.set_alarm(on);
    }

    fn set_invalid_led(&mut self, on: bool) {
        self.leds.set_invalid(on);
    }

    fn set_lockout_led(&mut self, on: bool) {
        self.leds.set_lockout(on);
    }

    fn siren_on(&mut self) {
        self.siren.on();
    }

    fn siren_off(&mut self) {
        self.siren.off();
    }

    fn all_off(&mut self) {
        self.leds.all_off();
        self.siren.off();
    }
}
