//! Serial console flows driven through the full service tick loop.

use gasguard::alarm::context::{ButtonFrame, SensorSnapshot};
use gasguard::app::events::AlarmEvent;
use gasguard::app::service::AlarmService;
use gasguard::config::AlarmConfig;

use crate::mock_hw::{MockConsole, MockHardware, RecordingSink};

fn rig() -> (AlarmService, MockHardware, MockConsole, RecordingSink) {
    (
        AlarmService::new(AlarmConfig::default()),
        MockHardware::new(),
        MockConsole::new(),
        RecordingSink::new(),
    )
}

/// Tick until the console rx queue drains, plus a settling tick.
fn drain(
    svc: &mut AlarmService,
    hw: &mut MockHardware,
    console: &mut MockConsole,
    sink: &mut RecordingSink,
) {
    while !console.rx.is_empty() {
        svc.tick(hw, console, sink);
    }
    svc.tick(hw, console, sink);
}

#[test]
fn status_queries_track_live_state() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    console.feed(b"123");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("The alarm is not activated\r\n"));
    assert!(console.tx.contains("Gas is not being detected\r\n"));
    assert!(console.tx.contains("Temperature is below the maximum level\r\n"));

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        over_temp: true,
        temperature_c: 60.0,
        potentiometer: 0.0,
    });
    console.tx.clear();
    console.feed(b"123");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("The alarm is activated\r\n"));
    assert!(console.tx.contains("Gas is being detected\r\n"));
    assert!(console.tx.contains("Temperature is above the maximum level\r\n"));
}

#[test]
fn serial_code_entry_disarms_end_to_end() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(svc.is_armed());

    hw.set_sensors(SensorSnapshot::default());
    console.feed(b"41100");
    drain(&mut svc, &mut hw, &mut console, &mut sink);

    assert!(!svc.is_armed());
    assert!(console.tx.contains("Please enter the code sequence.\r\n"));
    assert!(console.tx.contains("****"));
    assert!(console.tx.contains("The code is correct"));
    assert!(sink.contains(&AlarmEvent::Disarmed));

    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(!hw.siren_sounding());
}

#[test]
fn new_code_takes_effect_for_both_entry_paths() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    // Replace the secret with 0101 while disarmed.
    console.feed(b"50101");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("New code generated"));
    assert!(sink.contains(&AlarmEvent::SecretChanged));

    // Arm, then the old factory code must now fail over serial...
    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);
    console.feed(b"41100");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(svc.is_armed());
    assert!(console.tx.contains("The code is incorrect"));

    // ...and the new code works on the buttons.
    hw.set_buttons(ButtonFrame {
        enter: false,
        test: false,
        a: true,
        b: true,
        c: true,
        d: true,
    });
    svc.tick(&mut hw, &mut console, &mut sink); // acknowledge the failure
    hw.set_buttons(ButtonFrame {
        enter: true,
        test: false,
        a: false,
        b: true,
        c: false,
        d: true,
    });
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(!svc.is_armed());
}

#[test]
fn stalled_code_entry_times_out_without_counting_a_failure() {
    let mut config = AlarmConfig::default();
    config.code_entry_timeout_ms = 200; // 20 ticks
    let mut svc = AlarmService::new(config);
    let mut hw = MockHardware::new();
    let mut console = MockConsole::new();
    let mut sink = RecordingSink::new();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);

    // Start a code entry, send one byte, then go silent.
    console.feed(b"41");
    for _ in 0..30 {
        svc.tick(&mut hw, &mut console, &mut sink);
    }

    assert!(console.tx.contains("Code entry timed out"));
    assert!(svc.is_armed());
    assert!(!sink.events.iter().any(|e| matches!(e, AlarmEvent::CodeRejected { .. })));

    // The dispatcher is live again.
    console.tx.clear();
    console.feed(b"1");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("The alarm is activated\r\n"));
}

#[test]
fn readings_are_reported_with_two_decimals() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: false,
        over_temp: false,
        temperature_c: 25.0,
        potentiometer: 0.75,
    });
    console.feed(b"pcf");
    drain(&mut svc, &mut hw, &mut console, &mut sink);

    assert!(console.tx.contains("Potentiometer: 0.75\r\n"));
    assert!(console.tx.contains("Temperature: 25.00 \u{00B0} C\r\n"));
    assert!(console.tx.contains("Temperature: 77.00 \u{00B0} F\r\n"));
}

#[test]
fn unknown_command_prints_the_menu() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    console.feed(b"x");
    drain(&mut svc, &mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("Available commands:\r\n"));
    assert!(console.tx.contains("Press '4' to enter the code sequence\r\n"));
}
