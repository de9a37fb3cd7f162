//! 4-slot code sequences and the validator.
//!
//! A code is four ordered pressed/not-pressed values, one per code button
//! (A, B, C, D).  Validation is exact positional equality — there is no
//! partial-match scoring.

/// An ordered 4-slot pressed/not-pressed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSequence {
    slots: [bool; Self::SLOTS],
}

impl CodeSequence {
    /// Number of code buttons / slots.
    pub const SLOTS: usize = 4;

    pub const fn new(slots: [bool; Self::SLOTS]) -> Self {
        Self { slots }
    }

    /// Value of one slot (index 0 = button A).
    pub fn slot(&self, idx: usize) -> bool {
        self.slots[idx]
    }

    /// Overwrite one slot (index 0 = button A).
    pub fn set_slot(&mut self, idx: usize, pressed: bool) {
        self.slots[idx] = pressed;
    }

    /// Exact positional comparison against `secret`.
    ///
    /// The early return is an optimisation only — a mismatch anywhere makes
    /// the whole attempt invalid regardless of position.
    pub fn matches(&self, secret: &CodeSequence) -> bool {
        for i in 0..Self::SLOTS {
            if self.slots[i] != secret.slots[i] {
                return false;
            }
        }
        true
    }
}

/// The factory secret, restored on every power cycle: A and B pressed,
/// C and D not pressed.
impl Default for CodeSequence {
    fn default() -> Self {
        Self::new([true, true, false, false])
    }
}
