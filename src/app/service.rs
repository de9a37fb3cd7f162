//! Application orchestrator.
//!
//! [`AlarmService`] owns the alarm state and the three update passes
//! (activation, deactivation, console) and runs them in a fixed order once
//! per control tick.  Hardware access goes exclusively through the port
//! traits, so the whole service runs unmodified against mocks on the host.

use log::info;

use crate::alarm::activation::AlarmActivationEngine;
use crate::alarm::code::CodeSequence;
use crate::alarm::context::AlarmContext;
use crate::alarm::deactivation::AlarmDeactivationEngine;
use crate::config::AlarmConfig;
use crate::console::SerialConsole;

use super::events::AlarmEvent;
use super::ports::{AnnunciatorPort, ConsolePort, EventSink, InputPort};

/// Pre-tick state used to derive event diffs afterwards.
struct TickSnapshot {
    armed: bool,
    failures: u8,
    locked: bool,
    secret: CodeSequence,
}

/// The alarm application core.
pub struct AlarmService {
    ctx: AlarmContext,
    activation: AlarmActivationEngine,
    deactivation: AlarmDeactivationEngine,
    console: SerialConsole,
    tick_ms: u32,
}

impl AlarmService {
    pub fn new(config: AlarmConfig) -> Self {
        let tick_ms = config.tick_interval_ms;
        let console = SerialConsole::new(config.code_entry_timeout_ticks());
        Self {
            ctx: AlarmContext::new(config),
            activation: AlarmActivationEngine::new(),
            deactivation: AlarmDeactivationEngine::new(),
            console,
            tick_ms,
        }
    }

    /// Announce startup.  Call once before the first tick.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!("alarm service starting, tick interval {} ms", self.tick_ms);
        sink.emit(&AlarmEvent::Started);
    }

    /// Run one control tick.
    ///
    /// Order matters: sensors are sampled first so both engines see the same
    /// snapshot, activation runs before deactivation so a detector firing in
    /// the same tick as a correct code still wins the tick it fires in, and
    /// annunciators are applied last so they reflect the settled state.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + AnnunciatorPort),
        console_port: &mut impl ConsolePort,
        sink: &mut impl EventSink,
    ) {
        let frame = hw.read();
        let before = self.snapshot();

        self.ctx.sensors = frame.sensors;
        self.activation
            .update(&mut self.ctx, frame.buttons.test, self.tick_ms);
        self.deactivation.update(&mut self.ctx, &frame.buttons);
        self.console.poll(&mut self.ctx, console_port);

        self.apply_annunciators(hw);
        self.emit_diffs(&before, sink);
    }

    /// Administrative lockout reset.  Clears the failure streak and the
    /// invalid-code indicator; the armed state is untouched, so a still-armed
    /// panel goes back to accepting code entries.
    pub fn reset_lockout(&mut self, sink: &mut impl EventSink) {
        info!("administrative lockout reset");
        self.ctx.lockout.reset();
        self.ctx.invalid_code = false;
        sink.emit(&AlarmEvent::LockoutReset);
    }

    pub fn is_armed(&self) -> bool {
        self.ctx.armed
    }

    pub fn is_locked_out(&self) -> bool {
        self.ctx.lockout.is_locked()
    }

    pub fn context(&self) -> &AlarmContext {
        &self.ctx
    }

    fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            armed: self.ctx.armed,
            failures: self.ctx.lockout.count(),
            locked: self.ctx.lockout.is_locked(),
            secret: self.ctx.secret,
        }
    }

    fn apply_annunciators(&self, hw: &mut impl AnnunciatorPort) {
        hw.set_alarm_led(self.ctx.commands.alarm_led);
        hw.set_invalid_led(self.ctx.invalid_code);
        hw.set_lockout_led(self.ctx.lockout.is_locked());
        if self.ctx.commands.siren {
            hw.siren_on();
        } else {
            hw.siren_off();
        }
    }

    fn emit_diffs(&self, before: &TickSnapshot, sink: &mut impl EventSink) {
        if self.ctx.armed && !before.armed {
            sink.emit(&AlarmEvent::Armed {
                gas: self.ctx.gas_detected,
                over_temp: self.ctx.over_temp_detected,
                test: self.ctx.test_triggered,
            });
        } else if !self.ctx.armed && before.armed {
            sink.emit(&AlarmEvent::Disarmed);
        }

        if self.ctx.lockout.count() > before.failures {
            sink.emit(&AlarmEvent::CodeRejected {
                consecutive_failures: self.ctx.lockout.count(),
            });
        }
        if self.ctx.lockout.is_locked() && !before.locked {
            sink.emit(&AlarmEvent::LockedOut);
        }

        if self.ctx.secret != before.secret {
            sink.emit(&AlarmEvent::SecretChanged);
        }
    }
}
