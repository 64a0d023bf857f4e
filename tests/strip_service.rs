mod common;

use std::{thread, time::Duration};

use common::RED;
use embassy_futures::block_on;
use led_strip_composer::{
    Animation, AnimationEngine, AnimationEngineConfig, AnimationKind, AnimationOutcome,
    AnimationReport, CommandChannel, ReportChannel, SharedState, StripCommand,
    driver::LedDriver,
};
use led_strip_controller::{
    app::LedStripUsecases,
    domain::{
        entity::LastRun,
        ports::{LedStripChanger, LedStripReader, LedStripUsecasesPort},
    },
    infrastructure::{
        drivers::TraceLedDriver,
        services::{LedStripService, ReportSlot},
        tasks::record_report,
    },
};

#[test]
fn full_queue_waits_for_the_engine() {
    let commands = CommandChannel::new();
    let state = SharedState::new();
    let slot = ReportSlot::new();
    let service = LedStripService::new(commands.sender(), &state, &slot, 10);

    for _ in 0..4 {
        service.send_command(StripCommand::Cancel);
    }

    thread::scope(|scope| {
        let turn_off = scope.spawn(|| service.send_command(StripCommand::TurnOff));
        thread::sleep(Duration::from_millis(50));
        assert!(!turn_off.is_finished());

        assert_eq!(commands.try_receive().ok(), Some(StripCommand::Cancel));
        turn_off.join().unwrap();
    });

    let mut queued = Vec::new();
    while let Ok(command) = commands.try_receive() {
        queued.push(command);
    }
    assert_eq!(
        queued,
        vec![
            StripCommand::Cancel,
            StripCommand::Cancel,
            StripCommand::Cancel,
            StripCommand::TurnOff,
        ]
    );
}

#[test]
fn status_includes_last_report() {
    let commands = CommandChannel::new();
    let state = SharedState::new();
    let slot = ReportSlot::new();
    let service = LedStripService::new(commands.sender(), &state, &slot, 12);

    let status = service.status();
    assert_eq!(status.number_of_leds, 12);
    assert_eq!(status.last_run, None);

    record_report(
        &slot,
        AnimationReport {
            kind: AnimationKind::KnightRider,
            outcome: AnimationOutcome::Cancelled,
            frames: 17,
        },
    );

    assert_eq!(
        service.status().last_run,
        Some(LastRun {
            animation: "knight_rider",
            outcome: "cancelled",
            frames: 17,
        })
    );
}

#[test]
fn facade_drives_engine_end_to_end() {
    let commands = CommandChannel::new();
    let reports = ReportChannel::new();
    let state = SharedState::new();
    let slot = ReportSlot::new();

    let mut engine: AnimationEngine<'_, TraceLedDriver, 16> = AnimationEngine::new(
        Some(TraceLedDriver::new()),
        commands.receiver(),
        reports.sender(),
        &AnimationEngineConfig::new(8),
    )
    .with_shared_state(&state);
    let usecases =
        LedStripUsecases::new(LedStripService::new(commands.sender(), &state, &slot, 8));

    usecases.turn_on(RED);
    block_on(engine.tick());
    record_report(&slot, reports.try_receive().unwrap());

    assert!(engine.frame().pixels().iter().all(|c| *c == RED));
    assert_eq!(engine.frame().transport().map(TraceLedDriver::frames), Some(2));

    let status = usecases.status();
    assert!(status.hardware);
    assert!(!status.is_running());
    assert_eq!(status.frames, 2);
    assert_eq!(
        status.last_run,
        Some(LastRun {
            animation: "solid",
            outcome: "completed",
            frames: 2,
        })
    );
}

#[test]
fn trace_driver_accepts_frames() {
    let mut driver = TraceLedDriver::new();
    driver.write(&[RED; 3]).unwrap();
    assert_eq!(driver.frames(), 1);
}

#[test]
fn simulated_engine_reports_no_hardware() {
    let commands = CommandChannel::new();
    let reports = ReportChannel::new();
    let state = SharedState::new();
    let slot = ReportSlot::new();

    let mut engine: AnimationEngine<'_, TraceLedDriver, 16> = AnimationEngine::new(
        None,
        commands.receiver(),
        reports.sender(),
        &AnimationEngineConfig::new(8),
    )
    .with_shared_state(&state);
    let service = LedStripService::new(commands.sender(), &state, &slot, 8);

    service.send_command(StripCommand::Play(Animation::RandomColor));
    block_on(engine.tick());

    let status = service.status();
    assert!(!status.hardware);
    assert_eq!(status.frames, 2);
    assert_eq!(engine.frame().transport_writes(), 0);
}
