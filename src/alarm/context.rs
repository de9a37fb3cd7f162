//! Shared mutable context threaded through every alarm update pass.
//!
//! `AlarmContext` is the single struct the activation engine, deactivation
//! engine, and serial console read from and write to.  It replaces the
//! legacy firmware's scattered globals with one explicit state record, so
//! each component can be unit tested deterministically.

use crate::alarm::code::CodeSequence;
use crate::alarm::lockout::LockoutCounter;
use crate::config::AlarmConfig;

// ---------------------------------------------------------------------------
// Input snapshots (read-only to the update passes; written by the input port)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every sensor in the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Gas detector tripped (digital line is active-low; `true` = gas present).
    pub gas_active: bool,
    /// Window-averaged temperature in Celsius.
    pub temperature_c: f32,
    /// True if the averaged temperature exceeds the configured threshold.
    pub over_temp: bool,
    /// Setpoint potentiometer, normalised 0.0 – 1.0.
    pub potentiometer: f32,
}

/// Raw button levels sampled at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonFrame {
    pub enter: bool,
    pub test: bool,
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
}

impl ButtonFrame {
    /// The A–D levels as an ordered code attempt.
    pub fn code_slots(&self) -> [bool; CodeSequence::SLOTS] {
        [self.a, self.b, self.c, self.d]
    }

    /// The acknowledge gesture: all four code buttons held with Enter up.
    pub fn is_clear_gesture(&self) -> bool {
        self.a && self.b && self.c && self.d && !self.enter
    }
}

// ---------------------------------------------------------------------------
// Annunciator commands (written by the activation engine; applied by the
// service after each tick)
// ---------------------------------------------------------------------------

/// Outputs the blink/siren logic requests each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnunciatorCommands {
    /// Alarm indicator LED level (toggled at the hazard cadence while armed).
    pub alarm_led: bool,
    /// Siren sounding (open-drain pin driven low).
    pub siren: bool,
}

// ---------------------------------------------------------------------------
// AlarmContext
// ---------------------------------------------------------------------------

/// The shared state record passed `&mut` into every update pass.
pub struct AlarmContext {
    /// Alarm is armed (signalling).  Sticky: set by any detector or the test
    /// button, cleared only by a successful code entry.
    pub armed: bool,
    /// Gas hazard is contributing to the armed state.
    pub gas_detected: bool,
    /// Over-temperature hazard is contributing to the armed state.
    pub over_temp_detected: bool,
    /// The manual test trigger latched the current armed state.
    pub test_triggered: bool,

    /// Invalid-code indicator is showing.  While set, Enter presses are
    /// ignored until the operator acknowledges via the clear gesture.
    pub invalid_code: bool,

    /// Stored secret sequence.  Mutated only by the console's
    /// set-new-code command.
    pub secret: CodeSequence,
    /// Most recent attempt, overwritten on every validation.
    pub attempt: CodeSequence,

    /// Consecutive failed attempts, shared by the button and serial paths.
    pub lockout: LockoutCounter,

    /// Latest sensor readings.  Updated before each tick's update passes.
    pub sensors: SensorSnapshot,

    /// Annunciator outputs for this tick.
    pub commands: AnnunciatorCommands,

    /// System configuration (tunable parameters).
    pub config: AlarmConfig,
}

impl AlarmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: AlarmConfig) -> Self {
        Self {
            armed: false,
            gas_detected: false,
            over_temp_detected: false,
            test_triggered: false,
            invalid_code: false,
            secret: CodeSequence::default(),
            attempt: CodeSequence::new([false; CodeSequence::SLOTS]),
            lockout: LockoutCounter::new(config.lockout_threshold),
            sensors: SensorSnapshot::default(),
            commands: AnnunciatorCommands::default(),
            config,
        }
    }

    /// Successful deactivation: disarm and forgive the failure streak.
    /// Detector flags are cleared by the activation pass on the next tick,
    /// which observes `armed == false`.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.lockout.record_success();
    }
}
