//! Alarm activation pass — sensor fusion, arming, and blink cadence.
//!
//! Runs once per tick before the deactivation pass.  Any tripped detector
//! (or the manual test trigger) arms the alarm; while armed the siren is
//! enabled continuously and the alarm indicator toggles at a cadence chosen
//! by which hazard combination is active:
//!
//! | Active hazards        | Blink period |
//! |-----------------------|--------------|
//! | gas **and** over-temp | 100 ms       |
//! | gas only              | 1000 ms      |
//! | over-temp only        | 500 ms       |
//!
//! The combined cadence is the fastest because it is the most urgent; the
//! single-hazard cadences let an operator distinguish the failure type by
//! blink speed alone.

use log::info;

use crate::alarm::context::AlarmContext;

/// Drives the armed state, detector flags, siren, and indicator blink timer.
pub struct AlarmActivationEngine {
    /// Milliseconds accumulated towards the next indicator toggle.
    /// Deliberately left untouched while disarmed; it only has meaning
    /// while the alarm is signalling.
    accumulated_ms: u32,
}

impl AlarmActivationEngine {
    pub fn new() -> Self {
        Self { accumulated_ms: 0 }
    }

    /// Advance the activation pass by one tick of `elapsed_ms`.
    ///
    /// `test_requested` is the manual test button level; it latches both
    /// detector flags to simulate the worst-case hazard combination.
    pub fn update(&mut self, ctx: &mut AlarmContext, test_requested: bool, elapsed_ms: u32) {
        let was_armed = ctx.armed;

        if ctx.sensors.gas_active {
            ctx.gas_detected = true;
            ctx.armed = true;
        }
        if ctx.sensors.over_temp {
            ctx.over_temp_detected = true;
            ctx.armed = true;
        }
        if test_requested {
            ctx.gas_detected = true;
            ctx.over_temp_detected = true;
            ctx.test_triggered = true;
            ctx.armed = true;
        }

        if ctx.armed && !was_armed {
            info!(
                "alarm armed (gas={}, over_temp={}, test={})",
                ctx.gas_detected, ctx.over_temp_detected, ctx.test_triggered
            );
        }

        if ctx.armed {
            ctx.commands.siren = true;
            self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);

            if let Some(period) = Self::blink_period(ctx) {
                // Catch-up semantics: a late tick spanning several periods
                // still produces one toggle per elapsed period.
                while self.accumulated_ms >= period {
                    self.accumulated_ms -= period;
                    ctx.commands.alarm_led = !ctx.commands.alarm_led;
                }
            }
        } else {
            // Disarmed: indicator off, detector flags released, siren
            // floating.  The blink accumulator keeps its value; it is
            // meaningless until the next arming.
            ctx.commands.alarm_led = false;
            ctx.commands.siren = false;
            ctx.gas_detected = false;
            ctx.over_temp_detected = false;
            ctx.test_triggered = false;
        }
    }

    /// Cadence for the currently active hazard combination, or `None` when
    /// no detector flag is set (unreachable while armed in practice).
    fn blink_period(ctx: &AlarmContext) -> Option<u32> {
        match (ctx.gas_detected, ctx.over_temp_detected) {
            (true, true) => Some(ctx.config.blink_both_ms),
            (true, false) => Some(ctx.config.blink_gas_ms),
            (false, true) => Some(ctx.config.blink_over_temp_ms),
            (false, false) => None,
        }
    }
}
