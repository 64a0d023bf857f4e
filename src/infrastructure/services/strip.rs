use core::cell::Cell;

use embassy_executor::Spawner;
use embassy_futures::block_on;
use embassy_sync::{
    blocking_mutex::{Mutex, raw::CriticalSectionRawMutex},
    channel::TrySendError,
};
use led_strip_composer::{
    AnimationEngine, AnimationEngineConfig, AnimationReport, CommandChannel,
    CommandSender, ReportChannel, SharedState, StripCommand,
};

use crate::{
    config::{ANIMATION_TIMINGS, LED_COUNT_MAX},
    domain::{
        entity::StripStatus,
        ports::{LedStripChanger, LedStripHandler, LedStripReader},
    },
    infrastructure::{
        drivers::{StripDriver, get_seed},
        tasks::{strip_engine_task, strip_report_task},
        types::StripEngine,
    },
};

/// Channel for sending commands to the animation engine
static STRIP_COMMANDS: CommandChannel = CommandChannel::new();

/// Channel for finished animation reports
static STRIP_REPORTS: ReportChannel = ReportChannel::new();

/// Global lock-free engine state
static STRIP_STATE: SharedState = SharedState::new();

/// Most recent drained report
static LAST_REPORT: ReportSlot = ReportSlot::new();

/// Holds the latest finished animation report
pub struct ReportSlot {
    report: Mutex<CriticalSectionRawMutex, Cell<Option<AnimationReport>>>,
}

impl ReportSlot {
    pub const fn new() -> Self {
        Self {
            report: Mutex::new(Cell::new(None)),
        }
    }

    pub fn store(&self, report: AnimationReport) {
        self.report.lock(|cell| cell.set(Some(report)));
    }

    pub fn last(&self) -> Option<AnimationReport> {
        self.report.lock(Cell::get)
    }
}

impl Default for ReportSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip handler backed by the animation engine
#[derive(Clone, Copy)]
pub struct LedStripService<'a> {
    commands: CommandSender<'a>,
    state: &'a SharedState,
    last_report: &'a ReportSlot,
    number_of_leds: usize,
}

impl<'a> LedStripService<'a> {
    pub fn new(
        commands: CommandSender<'a>,
        state: &'a SharedState,
        last_report: &'a ReportSlot,
        number_of_leds: usize,
    ) -> Self {
        Self {
            commands,
            state,
            last_report,
            number_of_leds,
        }
    }
}

impl LedStripReader for LedStripService<'_> {
    fn number_of_leds(&self) -> usize {
        self.number_of_leds
    }

    fn status(&self) -> StripStatus {
        StripStatus::new(
            self.number_of_leds,
            self.state.snapshot(),
            self.last_report.last(),
        )
    }
}

impl LedStripChanger for LedStripService<'_> {
    /// Queue `command` for the engine.
    ///
    /// Called from the HTTP thread, never from the executor. A full queue
    /// blocks until the engine takes the next command.
    fn send_command(&self, command: StripCommand) {
        if let Err(TrySendError::Full(command)) = self.commands.try_send(command) {
            log::debug!("strip: command queue full, waiting for the engine");
            block_on(self.commands.send(command));
        }
    }
}

impl LedStripHandler for LedStripService<'_> {}

/// Start the animation engine and the report drain, returning the handle
/// the use cases talk to.
///
/// `driver` is `None` in simulation.
pub fn init_strip_service(
    spawner: Spawner,
    driver: Option<StripDriver>,
    led_count: usize,
) -> LedStripService<'static> {
    let config = AnimationEngineConfig::new(led_count)
        .with_timings(ANIMATION_TIMINGS)
        .with_seed(get_seed());
    let engine: StripEngine = AnimationEngine::new(
        driver,
        STRIP_COMMANDS.receiver(),
        STRIP_REPORTS.sender(),
        &config,
    )
    .with_shared_state(&STRIP_STATE);

    spawner
        .spawn(strip_engine_task(engine))
        .expect("Failed to spawn strip engine task");
    spawner
        .spawn(strip_report_task(STRIP_REPORTS.receiver(), &LAST_REPORT))
        .expect("Failed to spawn strip report task");

    LedStripService::new(
        STRIP_COMMANDS.sender(),
        &STRIP_STATE,
        &LAST_REPORT,
        led_count.min(LED_COUNT_MAX),
    )
}
