//! End-to-end alarm flows: detection, signalling, deactivation, lockout.
//!
//! Drives a full `AlarmService` through the port traits with mock adapters,
//! asserting on the annunciator history and emitted events.

use gasguard::alarm::context::{ButtonFrame, SensorSnapshot};
use gasguard::app::events::AlarmEvent;
use gasguard::app::service::AlarmService;
use gasguard::config::AlarmConfig;

use crate::mock_hw::{MockConsole, MockHardware, RecordingSink};

const CODE_OK: ButtonFrame = ButtonFrame {
    enter: true,
    test: false,
    a: true,
    b: true,
    c: false,
    d: false,
};

const CODE_WRONG: ButtonFrame = ButtonFrame {
    enter: true,
    test: false,
    a: false,
    b: false,
    c: true,
    d: true,
};

const ACK_GESTURE: ButtonFrame = ButtonFrame {
    enter: false,
    test: false,
    a: true,
    b: true,
    c: true,
    d: true,
};

fn rig() -> (AlarmService, MockHardware, MockConsole, RecordingSink) {
    (
        AlarmService::new(AlarmConfig::default()),
        MockHardware::new(),
        MockConsole::new(),
        RecordingSink::new(),
    )
}

fn ticks(
    n: u32,
    svc: &mut AlarmService,
    hw: &mut MockHardware,
    console: &mut MockConsole,
    sink: &mut RecordingSink,
) {
    for _ in 0..n {
        svc.tick(hw, console, sink);
    }
}

#[test]
fn gas_detection_arms_and_sounds_the_siren() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    svc.start(&mut sink);
    assert_eq!(sink.events, vec![AlarmEvent::Started]);

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);

    assert!(svc.is_armed());
    assert!(hw.siren_sounding());
    assert!(sink.contains(&AlarmEvent::Armed {
        gas: true,
        over_temp: false,
        test: false,
    }));

    // Gas clears but the alarm stays latched.
    hw.set_sensors(SensorSnapshot::default());
    ticks(200, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(svc.is_armed());
    assert!(hw.siren_sounding());
}

#[test]
fn gas_only_indicator_toggles_every_second() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });

    // 100 ticks x 10 ms = 1000 ms: exactly one toggle.
    ticks(99, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(!hw.alarm_led());
    ticks(1, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(hw.alarm_led());
    ticks(100, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(!hw.alarm_led());
}

#[test]
fn both_hazards_blink_fast() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        over_temp: true,
        ..SensorSnapshot::default()
    });

    ticks(10, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(hw.alarm_led(), "100 ms cadence: lit after 10 ticks");
    ticks(10, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(!hw.alarm_led());

    assert!(sink.contains(&AlarmEvent::Armed {
        gas: true,
        over_temp: true,
        test: false,
    }));
}

#[test]
fn button_code_disarms_the_panel() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(svc.is_armed());

    hw.set_sensors(SensorSnapshot::default());
    hw.set_buttons(CODE_OK);
    svc.tick(&mut hw, &mut console, &mut sink);

    assert!(!svc.is_armed());
    assert!(sink.contains(&AlarmEvent::Disarmed));

    // Outputs settle on the following tick.
    hw.set_buttons(ButtonFrame::default());
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(!hw.siren_sounding());
    assert!(!hw.alarm_led());
}

#[test]
fn failures_accumulate_across_button_and_serial_paths() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);

    // Three failed button attempts (acknowledge between each).
    for _ in 0..3 {
        hw.set_buttons(CODE_WRONG);
        svc.tick(&mut hw, &mut console, &mut sink);
        hw.set_buttons(ACK_GESTURE);
        svc.tick(&mut hw, &mut console, &mut sink);
    }
    hw.set_buttons(ButtonFrame::default());
    assert!(!svc.is_locked_out());

    // Two failed serial attempts share the same streak.
    for _ in 0..2 {
        console.feed(b"40011");
        ticks(6, &mut svc, &mut hw, &mut console, &mut sink);
    }

    assert!(svc.is_locked_out());
    assert!(hw.lockout_led());
    assert!(sink.contains(&AlarmEvent::LockedOut));
    assert!(sink.contains(&AlarmEvent::CodeRejected {
        consecutive_failures: 5,
    }));

    // Locked out: the serial path refuses code entry outright.
    console.tx.clear();
    console.feed(b"4");
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(console.tx.contains("The system is locked out"));
}

#[test]
fn admin_reset_recovers_a_locked_out_panel() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_sensors(SensorSnapshot {
        gas_active: true,
        ..SensorSnapshot::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);

    for _ in 0..5 {
        hw.set_buttons(CODE_WRONG);
        svc.tick(&mut hw, &mut console, &mut sink);
        hw.set_buttons(ACK_GESTURE);
        svc.tick(&mut hw, &mut console, &mut sink);
    }
    assert!(svc.is_locked_out());

    svc.reset_lockout(&mut sink);
    assert!(!svc.is_locked_out());
    assert!(sink.contains(&AlarmEvent::LockoutReset));

    // A correct entry now disarms.
    hw.set_buttons(CODE_OK);
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(!svc.is_armed());

    hw.set_buttons(ButtonFrame::default());
    svc.tick(&mut hw, &mut console, &mut sink);
    assert!(!hw.lockout_led());
}

#[test]
fn test_button_simulates_the_combined_hazard() {
    let (mut svc, mut hw, mut console, mut sink) = rig();

    hw.set_buttons(ButtonFrame {
        test: true,
        ..ButtonFrame::default()
    });
    svc.tick(&mut hw, &mut console, &mut sink);

    assert!(svc.is_armed());
    assert!(hw.siren_sounding());
    assert!(sink.contains(&AlarmEvent::Armed {
        gas: true,
        over_temp: true,
        test: true,
    }));

    // Releasing the button does not disarm.
    hw.set_buttons(ButtonFrame::default());
    ticks(50, &mut svc, &mut hw, &mut console, &mut sink);
    assert!(svc.is_armed());
}
