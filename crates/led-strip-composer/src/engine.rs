//! Animation Engine - supervisor of the single active animation
//!
//! The AnimationEngine is the central coordinator that:
//! - Owns the frame buffer and its transport
//! - Accepts commands via async channel
//! - Runs at most one animation routine at a time
//! - Drops a running routine at its next suspension point when a new
//!   command arrives, before that command touches the frame buffer
//! - Reports every finished run on the report channel
//! - Optionally publishes state to SharedState for external observation,
//!   with the frame total updated on every commit

use embassy_futures::select::{Either, select};
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};
use rand::{SeedableRng as _, rngs::SmallRng};

use crate::{
    animation::{Animation, StripCommand},
    driver::LedDriver,
    frame::FrameBuffer,
    models::{AnimationOutcome, AnimationReport},
    routine::{self, AnimationTimings},
    state::SharedState,
};

/// Command channel capacity
pub const COMMAND_CHANNEL_SIZE: usize = 4;

/// Report channel capacity
pub const REPORT_CHANNEL_SIZE: usize = 8;

/// Type alias for the command channel
pub type CommandChannel =
    Channel<CriticalSectionRawMutex, StripCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for command sender
pub type CommandSender<'a> =
    Sender<'a, CriticalSectionRawMutex, StripCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, StripCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for the report channel
pub type ReportChannel =
    Channel<CriticalSectionRawMutex, AnimationReport, REPORT_CHANNEL_SIZE>;

/// Type alias for report sender
pub type ReportSender<'a> =
    Sender<'a, CriticalSectionRawMutex, AnimationReport, REPORT_CHANNEL_SIZE>;

/// Type alias for report receiver
pub type ReportReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, AnimationReport, REPORT_CHANNEL_SIZE>;

/// Engine construction parameters
#[derive(Debug, Clone, Copy)]
pub struct AnimationEngineConfig {
    /// Number of LEDs on the strip, at most the buffer capacity
    pub led_count: usize,
    /// Frame pacing for the routines
    pub timings: AnimationTimings,
    /// Seed for random colors
    pub seed: u64,
}

impl AnimationEngineConfig {
    pub fn new(led_count: usize) -> Self {
        Self {
            led_count,
            timings: AnimationTimings::default(),
            seed: 0,
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: AnimationTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Animation Engine - the strip's supervisor
///
/// Generic over `D: LedDriver` to support different hardware backends.
/// `N` is the frame buffer capacity.
pub struct AnimationEngine<'a, D: LedDriver, const N: usize> {
    /// Pixels and transport, touched only by this engine
    frame: FrameBuffer<'a, D, N>,
    /// Command receiver
    commands: CommandReceiver<'a>,
    /// Finished run reports
    reports: ReportSender<'a>,
    /// Random source for random colors
    rng: SmallRng,
    /// Frame pacing
    timings: AnimationTimings,
    /// Optional shared state for external observation
    shared_state: Option<&'a SharedState>,
}

impl<'a, D: LedDriver, const N: usize> AnimationEngine<'a, D, N> {
    /// Create a new engine.
    ///
    /// Passing `None` as transport runs the strip in simulation: routines
    /// behave the same but no frame reaches a driver.
    pub fn new(
        transport: Option<D>,
        commands: CommandReceiver<'a>,
        reports: ReportSender<'a>,
        config: &AnimationEngineConfig,
    ) -> Self {
        Self {
            frame: FrameBuffer::with_transport(transport, config.led_count),
            commands,
            reports,
            rng: SmallRng::seed_from_u64(config.seed),
            timings: config.timings,
            shared_state: None,
        }
    }

    /// Attach shared state for external observation
    #[must_use]
    pub fn with_shared_state(mut self, state: &'a SharedState) -> Self {
        state.set_hardware(self.frame.has_transport());
        self.frame.observe(state);
        self.shared_state = Some(state);
        self
    }

    /// Get the frame buffer
    pub fn frame(&self) -> &FrameBuffer<'a, D, N> {
        &self.frame
    }

    /// Wait for one command and process it.
    ///
    /// If a command supersedes a running animation, it is processed in the
    /// same call, so this returns only once the engine is idle again.
    pub async fn tick(&mut self) {
        let mut command = self.commands.receive().await;
        while let Some(next) = self.execute(command).await {
            command = next;
        }
    }

    /// Run the engine loop indefinitely
    pub async fn run(&mut self) {
        loop {
            self.tick().await;
        }
    }

    /// Execute a command, returning the command that interrupted it, if any
    async fn execute(&mut self, command: StripCommand) -> Option<StripCommand> {
        match command {
            StripCommand::Play(animation) => self.play(animation).await,
            StripCommand::Cancel => {
                log::debug!("engine: cancel while idle");
                None
            }
            StripCommand::TurnOff => {
                if let Err(e) = self.frame.clear() {
                    log::warn!("engine: failed to clear strip: {:?}", e);
                }
                None
            }
        }
    }

    async fn play(&mut self, animation: Animation) -> Option<StripCommand> {
        let kind = animation.kind();
        let frames_before = self.frame.frames();
        log::debug!("engine: starting {}", kind.as_str());
        if let Some(shared) = self.shared_state {
            shared.set_running(kind);
        }

        let Self {
            frame,
            commands,
            rng,
            timings,
            ..
        } = self;
        let routine = routine::play(frame, rng, timings, &animation);
        let (outcome, next) = match select(routine, commands.receive()).await {
            Either::First(Ok(())) => (AnimationOutcome::Completed, None),
            Either::First(Err(e)) => (AnimationOutcome::Failed(e), None),
            Either::Second(next) => (AnimationOutcome::Cancelled, Some(next)),
        };

        self.finish(AnimationReport {
            kind,
            outcome,
            frames: self.frame.frames().wrapping_sub(frames_before),
        });
        next
    }

    /// Publish a finished run
    fn finish(&mut self, report: AnimationReport) {
        match report.outcome {
            AnimationOutcome::Failed(e) => log::error!(
                "engine: {} aborted after {} frames: {:?}",
                report.kind.as_str(),
                report.frames,
                e
            ),
            outcome => log::debug!(
                "engine: {} {} after {} frames",
                report.kind.as_str(),
                outcome.as_str(),
                report.frames
            ),
        }

        if let Some(shared) = self.shared_state {
            shared.set_idle();
            shared.set_last_outcome(report.outcome);
        }

        if self.reports.try_send(report).is_err() {
            log::warn!("engine: report channel full, dropping {:?}", report);
        }
    }
}
