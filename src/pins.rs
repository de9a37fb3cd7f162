//! GPIO / peripheral pin assignments for the GasGuard panel board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Buttons (active-high, external pull-down)
// ---------------------------------------------------------------------------

/// Enter button — commits the code currently held on A–D.
pub const ENTER_BUTTON_GPIO: i32 = 1;
/// Alarm test button — simulates the worst-case hazard combination.
pub const TEST_BUTTON_GPIO: i32 = 2;
/// Code entry buttons A–D.
pub const CODE_A_GPIO: i32 = 4;
pub const CODE_B_GPIO: i32 = 5;
pub const CODE_C_GPIO: i32 = 6;
pub const CODE_D_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// MQ-2 gas detector digital line. LOW = gas present (active-low).
pub const GAS_SENSOR_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Setpoint potentiometer (0.0 – 1.0 normalised).
pub const POT_ADC_GPIO: i32 = 8;
/// LM35 temperature sensor — 10 mV/°C linear analog output.
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Annunciators
// ---------------------------------------------------------------------------

/// Alarm indicator LED (blinks at the hazard-dependent cadence).
pub const ALARM_LED_GPIO: i32 = 13;
/// Invalid-code indicator LED.
pub const INVALID_LED_GPIO: i32 = 14;
/// Lockout indicator LED (latched on after repeated failures).
pub const LOCKOUT_LED_GPIO: i32 = 15;

/// Siren pin. Open-drain: driven LOW while sounding, floating when silent.
pub const SIREN_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
pub const UART_BAUD: u32 = 115_200;
