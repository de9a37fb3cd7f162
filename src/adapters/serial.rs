//! UART console adapter (target only).
//!
//! Binds UART1 to the [`ConsolePort`] trait with a zero-timeout read so the
//! console poll never blocks the control tick.

use esp_idf_sys as sys;

use crate::app::ports::ConsolePort;
use crate::error::{Error, Result};
use crate::pins;

const UART_NUM: sys::uart_port_t = 1;
const RX_BUFFER_BYTES: i32 = 256;

pub struct UartConsole;

impl UartConsole {
    /// Install the UART driver and configure the console port.
    pub fn new() -> Result<Self> {
        let config = sys::uart_config_t {
            baud_rate: pins::UART_BAUD as i32,
            data_bits: sys::uart_word_length_t_UART_DATA_8_BITS,
            parity: sys::uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: sys::uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: sys::uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };
        unsafe {
            check(sys::uart_param_config(UART_NUM, &config), "uart config")?;
            check(
                sys::uart_set_pin(
                    UART_NUM,
                    pins::UART_TX_GPIO,
                    pins::UART_RX_GPIO,
                    sys::UART_PIN_NO_CHANGE,
                    sys::UART_PIN_NO_CHANGE,
                ),
                "uart pins",
            )?;
            check(
                sys::uart_driver_install(UART_NUM, RX_BUFFER_BYTES, 0, 0, core::ptr::null_mut(), 0),
                "uart driver install",
            )?;
        }
        Ok(Self)
    }
}

impl ConsolePort for UartConsole {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        let n = unsafe {
            sys::uart_read_bytes(UART_NUM, (&mut byte as *mut u8).cast(), 1, 0)
        };
        (n == 1).then_some(byte)
    }

    fn write(&mut self, text: &str) {
        unsafe {
            sys::uart_write_bytes(UART_NUM, text.as_ptr().cast(), text.len());
        }
    }
}

fn check(err: sys::esp_err_t, what: &'static str) -> Result<()> {
    if err == sys::ESP_OK {
        Ok(())
    } else {
        Err(Error::Init(what))
    }
}
