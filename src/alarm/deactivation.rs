//! Alarm deactivation pass — button-entered code validation and lockout.
//!
//! Runs once per tick after the activation pass.  Per tick:
//!
//! 1. **Lockout guard** — once the failure streak reaches the threshold,
//!    every further press is ignored; only the administrative reset (or a
//!    power cycle) recovers the panel.
//! 2. **Acknowledge gesture** — all four code buttons held with Enter up
//!    clears the invalid-code indicator, letting the operator retry.
//! 3. **Attempt capture** — Enter pressed, invalid indicator off, alarm
//!    armed: the A–D levels are captured as the attempt and validated.
//!
//! The invalid-indicator gate is a deliberate rate limit: once an attempt
//! fails, Enter is a no-op until the operator performs the acknowledge
//! gesture, so rapid repeated guessing is throttled by hand motion.

use log::{info, warn};

use crate::alarm::code::CodeSequence;
use crate::alarm::context::{AlarmContext, ButtonFrame};

/// Validates button-entered codes and maintains the lockout streak.
pub struct AlarmDeactivationEngine;

impl AlarmDeactivationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Advance the deactivation pass by one tick with the sampled buttons.
    pub fn update(&mut self, ctx: &mut AlarmContext, buttons: &ButtonFrame) {
        if ctx.lockout.is_locked() {
            return;
        }

        if buttons.is_clear_gesture() {
            ctx.invalid_code = false;
        }

        if buttons.enter && !ctx.invalid_code && ctx.armed {
            ctx.attempt = CodeSequence::new(buttons.code_slots());
            if ctx.attempt.matches(&ctx.secret) {
                info!("button code accepted, disarming");
                ctx.disarm();
            } else {
                ctx.invalid_code = true;
                let locked = ctx.lockout.record_failure();
                warn!(
                    "button code rejected ({} consecutive failures{})",
                    ctx.lockout.count(),
                    if locked { ", lockout engaged" } else { "" }
                );
            }
        }
    }
}
