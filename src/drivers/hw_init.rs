//! ESP-IDF peripheral bring-up and thin pin/ADC accessors.
//!
//! This module is the only place raw `esp-idf-sys` calls live.  Everything
//! above it works in terms of GPIO numbers and normalised ADC fractions, so
//! the rest of the crate stays target-independent.

use esp_idf_sys as sys;

use crate::error::{Error, Result};
use crate::pins;

/// ADC1 channel wired to the LM35 temperature sensor.
pub const ADC1_CH_TEMP: sys::adc1_channel_t = sys::adc1_channel_t_ADC1_CHANNEL_8;
/// ADC1 channel wired to the setpoint potentiometer.
pub const ADC1_CH_POT: sys::adc1_channel_t = sys::adc1_channel_t_ADC1_CHANNEL_7;

const ADC_FULL_SCALE: f32 = 4095.0;

/// Configure every pin and the ADC.  Call once at startup, before any
/// driver touches the hardware.
pub fn init() -> Result<()> {
    unsafe {
        // Inputs: buttons (pull-down, pressed = high) and the gas line.
        for gpio in [
            pins::ENTER_BUTTON_GPIO,
            pins::TEST_BUTTON_GPIO,
            pins::CODE_A_GPIO,
            pins::CODE_B_GPIO,
            pins::CODE_C_GPIO,
            pins::CODE_D_GPIO,
        ] {
            check(
                sys::gpio_set_direction(gpio, sys::gpio_mode_t_GPIO_MODE_INPUT),
                "button direction",
            )?;
            check(
                sys::gpio_set_pull_mode(gpio, sys::gpio_pull_mode_t_GPIO_PULLDOWN_ONLY),
                "button pull",
            )?;
        }
        check(
            sys::gpio_set_direction(pins::GAS_SENSOR_GPIO, sys::gpio_mode_t_GPIO_MODE_INPUT),
            "gas line direction",
        )?;
        check(
            sys::gpio_set_pull_mode(pins::GAS_SENSOR_GPIO, sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY),
            "gas line pull",
        )?;

        // Indicator outputs, off at boot.
        for gpio in [
            pins::ALARM_LED_GPIO,
            pins::INVALID_LED_GPIO,
            pins::LOCKOUT_LED_GPIO,
        ] {
            check(
                sys::gpio_set_direction(gpio, sys::gpio_mode_t_GPIO_MODE_OUTPUT),
                "led direction",
            )?;
            gpio_write(gpio, false);
        }

        // Siren is open-drain: floating = silent, driven low = sounding.
        check(
            sys::gpio_set_direction(pins::SIREN_GPIO, sys::gpio_mode_t_GPIO_MODE_OUTPUT_OD),
            "siren direction",
        )?;
        gpio_write(pins::SIREN_GPIO, true);

        // ADC1, 12-bit, 11 dB attenuation for the full 3.3 V span.
        check(
            sys::adc1_config_width(sys::adc_bits_width_t_ADC_WIDTH_BIT_12),
            "adc width",
        )?;
        for ch in [ADC1_CH_TEMP, ADC1_CH_POT] {
            check(
                sys::adc1_config_channel_atten(ch, sys::adc_atten_t_ADC_ATTEN_DB_11),
                "adc attenuation",
            )?;
        }
    }
    Ok(())
}

/// Current level of an input pin.
pub fn gpio_read(gpio: i32) -> bool {
    unsafe { sys::gpio_get_level(gpio) != 0 }
}

/// Drive an output pin.
pub fn gpio_write(gpio: i32, level: bool) {
    unsafe {
        sys::gpio_set_level(gpio, u32::from(level));
    }
}

/// One raw ADC1 conversion, normalised to 0.0 – 1.0.
pub fn adc1_read_fraction(channel: sys::adc1_channel_t) -> f32 {
    let raw = unsafe { sys::adc1_get_raw(channel) };
    (raw.max(0) as f32) / ADC_FULL_SCALE
}

fn check(err: sys::esp_err_t, what: &'static str) -> Result<()> {
    if err == sys::ESP_OK {
        Ok(())
    } else {
        Err(Error::Init(what))
    }
}
