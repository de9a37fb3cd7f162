//! Serial command console — single-character dispatcher over the UART.
//!
//! Each received character is one command:
//!
//! | char      | action                                            |
//! |-----------|---------------------------------------------------|
//! | `1`       | report armed/disarmed                             |
//! | `2`       | report the raw gas-detector boolean               |
//! | `3`       | report the over-temperature boolean               |
//! | `4`       | prompt, then collect a 4-byte code attempt        |
//! | `5`       | prompt, then collect a 4-byte replacement secret  |
//! | `p` / `P` | report the potentiometer reading (2 decimals)     |
//! | `c` / `C` | report the averaged temperature in Celsius        |
//! | `f` / `F` | the same temperature in Fahrenheit                |
//! | other     | print the command listing                         |
//!
//! Commands `4` and `5` switch the dispatcher into a collecting mode that
//! consumes the next four bytes, echoing `*` per byte.  Unlike the legacy
//! panel, collection never blocks: the state machine advances at most one
//! byte per [`poll`](SerialConsole::poll) and an inactivity timeout
//! abandons the entry, so a stalled peer cannot hang the tick loop.
//!
//! Responses are literal `\r\n`-terminated lines matching the legacy panel
//! wording, so existing operator tooling keeps working.

use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use crate::alarm::code::CodeSequence;
use crate::alarm::context::AlarmContext;
use crate::app::ports::ConsolePort;
use crate::sensors::temperature::celsius_to_fahrenheit;

// ── Response lines (legacy panel wording) ─────────────────────

const MSG_ALARM_ON: &str = "The alarm is activated\r\n";
const MSG_ALARM_OFF: &str = "The alarm is not activated\r\n";
const MSG_GAS_ON: &str = "Gas is being detected\r\n";
const MSG_GAS_OFF: &str = "Gas is not being detected\r\n";
const MSG_TEMP_HIGH: &str = "Temperature is above the maximum level\r\n";
const MSG_TEMP_LOW: &str = "Temperature is below the maximum level\r\n";
const MSG_CODE_OK: &str = "\r\nThe code is correct\r\n\r\n";
const MSG_CODE_BAD: &str = "\r\nThe code is incorrect\r\n\r\n";
const MSG_NEW_CODE: &str = "\r\nNew code generated\r\n\r\n";
const MSG_LOCKED_OUT: &str = "The system is locked out\r\n\r\n";
const MSG_ENTRY_TIMEOUT: &str = "\r\nCode entry timed out\r\n\r\n";

/// What the four collected bytes are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodePurpose {
    /// Validate against the stored secret (command `4`).
    Validate,
    /// Replace the stored secret (command `5`).
    SetSecret,
}

/// Dispatcher state: idle between commands, or mid-collection.
enum Mode {
    Idle,
    Collecting {
        purpose: CodePurpose,
        /// Attempt under construction (`Validate`) or the staged
        /// replacement, seeded from the current secret (`SetSecret`).
        staged: CodeSequence,
        /// Next slot to fill, 0-based.
        cursor: usize,
        /// A non-`0`/`1` byte arrived during a `Validate` collection.
        invalid: bool,
        /// Polls since the last received byte.
        idle_ticks: u32,
    },
}

/// Single-character command console sharing the alarm state record.
pub struct SerialConsole {
    mode: Mode,
    timeout_ticks: u32,
}

impl SerialConsole {
    pub fn new(timeout_ticks: u32) -> Self {
        Self {
            mode: Mode::Idle,
            timeout_ticks,
        }
    }

    /// Advance the console by at most one received byte.
    ///
    /// Called once per control tick; never blocks.
    pub fn poll(&mut self, ctx: &mut AlarmContext, port: &mut impl ConsolePort) {
        match self.mode {
            Mode::Idle => {
                if let Some(byte) = port.read_byte() {
                    self.dispatch(byte, ctx, port);
                }
            }
            Mode::Collecting { .. } => self.collect(ctx, port),
        }
    }

    // ── Idle dispatch ─────────────────────────────────────────

    fn dispatch(&mut self, byte: u8, ctx: &mut AlarmContext, port: &mut impl ConsolePort) {
        match byte {
            b'1' => port.write(if ctx.armed { MSG_ALARM_ON } else { MSG_ALARM_OFF }),
            b'2' => port.write(if ctx.sensors.gas_active {
                MSG_GAS_ON
            } else {
                MSG_GAS_OFF
            }),
            b'3' => port.write(if ctx.sensors.over_temp {
                MSG_TEMP_HIGH
            } else {
                MSG_TEMP_LOW
            }),

            b'4' => {
                // The lockout guard applies to the serial path too; the
                // legacy panel only guarded the buttons.
                if ctx.lockout.is_locked() {
                    warn!("console code entry refused: locked out");
                    port.write(MSG_LOCKED_OUT);
                    return;
                }
                port.write("Please enter the code sequence.\r\n");
                Self::write_entry_instructions(port);
                self.mode = Mode::Collecting {
                    purpose: CodePurpose::Validate,
                    staged: CodeSequence::new([false; CodeSequence::SLOTS]),
                    cursor: 0,
                    invalid: false,
                    idle_ticks: 0,
                };
            }

            b'5' => {
                port.write("Please enter new code sequence\r\n");
                Self::write_entry_instructions(port);
                self.mode = Mode::Collecting {
                    purpose: CodePurpose::SetSecret,
                    // Seed from the current secret: slots skipped by a
                    // non-0/1 byte keep their old value.
                    staged: ctx.secret,
                    cursor: 0,
                    invalid: false,
                    idle_ticks: 0,
                };
            }

            b'p' | b'P' => {
                let mut line: String<48> = String::new();
                let _ = write!(line, "Potentiometer: {:.2}\r\n", ctx.sensors.potentiometer);
                port.write(&line);
            }

            b'c' | b'C' => {
                let mut line: String<48> = String::new();
                let _ = write!(
                    line,
                    "Temperature: {:.2} \u{00B0} C\r\n",
                    ctx.sensors.temperature_c
                );
                port.write(&line);
            }

            b'f' | b'F' => {
                let mut line: String<48> = String::new();
                let _ = write!(
                    line,
                    "Temperature: {:.2} \u{00B0} F\r\n",
                    celsius_to_fahrenheit(ctx.sensors.temperature_c)
                );
                port.write(&line);
            }

            _ => Self::write_available_commands(port),
        }
    }

    // ── Collecting mode ───────────────────────────────────────

    fn collect(&mut self, ctx: &mut AlarmContext, port: &mut impl ConsolePort) {
        let Mode::Collecting {
            purpose,
            ref mut staged,
            ref mut cursor,
            ref mut invalid,
            ref mut idle_ticks,
        } = self.mode
        else {
            return;
        };

        let Some(byte) = port.read_byte() else {
            *idle_ticks += 1;
            if *idle_ticks >= self.timeout_ticks {
                warn!("console code entry timed out after {} polls", idle_ticks);
                port.write(MSG_ENTRY_TIMEOUT);
                self.mode = Mode::Idle;
            }
            return;
        };

        *idle_ticks = 0;
        port.write("*");

        match byte {
            b'0' | b'1' => staged.set_slot(*cursor, byte == b'1'),
            // Validate: any other byte makes the whole attempt incorrect.
            // SetSecret: the slot silently keeps its previous value.
            _ => {
                if purpose == CodePurpose::Validate {
                    *invalid = true;
                }
            }
        }
        *cursor += 1;

        if *cursor < CodeSequence::SLOTS {
            return;
        }

        let staged = *staged;
        let invalid = *invalid;
        self.mode = Mode::Idle;

        match purpose {
            CodePurpose::Validate => self.finish_validation(staged, invalid, ctx, port),
            CodePurpose::SetSecret => {
                ctx.secret = staged;
                info!("secret sequence replaced over console");
                port.write(MSG_NEW_CODE);
            }
        }
    }

    fn finish_validation(
        &mut self,
        attempt: CodeSequence,
        invalid: bool,
        ctx: &mut AlarmContext,
        port: &mut impl ConsolePort,
    ) {
        ctx.attempt = attempt;
        if !invalid && attempt.matches(&ctx.secret) {
            info!("console code accepted, disarming");
            port.write(MSG_CODE_OK);
            ctx.disarm();
            ctx.invalid_code = false;
        } else {
            warn!("console code rejected");
            port.write(MSG_CODE_BAD);
            ctx.invalid_code = true;
            ctx.lockout.record_failure();
        }
    }

    // ── Static text ───────────────────────────────────────────

    fn write_entry_instructions(port: &mut impl ConsolePort) {
        port.write("First enter 'A', then 'B', then 'C', and finally 'D' button\r\n");
        port.write("In each case type 1 for pressed or 0 for not pressed\r\n");
        port.write("For example, for 'A' = pressed, 'B' = pressed, 'C' = not pressed, ");
        port.write("'D' = not pressed, enter '1', then '1', then '0', and finally '0'\r\n\r\n");
    }

    fn write_available_commands(port: &mut impl ConsolePort) {
        port.write("Available commands:\r\n");
        port.write("Press '1' to get the alarm state\r\n");
        port.write("Press '2' to get the gas detector state\r\n");
        port.write("Press '3' to get the over temperature detector state\r\n");
        port.write("Press '4' to enter the code sequence\r\n");
        port.write("Press '5' to enter a new code\r\n");
        port.write("Press 'P' or 'p' to get potentiometer reading\r\n");
        port.write("Press 'f' or 'F' to get lm35 reading in Fahrenheit\r\n");
        port.write("Press 'c' or 'C' to get lm35 reading in Celsius\r\n\r\n");
    }
}
