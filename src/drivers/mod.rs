//! Hardware drivers — button bank, indicator LEDs, siren, and (on the
//! target) the ESP-IDF peripheral bring-up.

pub mod buttons;
#[cfg(target_os = "espidf")]
pub mod hw_init;
pub mod indicators;
pub mod siren;

pub use buttons::ButtonBank;
pub use indicators::IndicatorLeds;
pub use siren::SirenDriver;
