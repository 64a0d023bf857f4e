use led_strip_composer::{AnimationReport, StripSnapshot};
use serde::Serialize;

/// Outcome of the most recent finished animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastRun {
    pub animation: &'static str,
    pub outcome: &'static str,
    pub frames: u32,
}

impl From<AnimationReport> for LastRun {
    fn from(report: AnimationReport) -> Self {
        Self {
            animation: report.kind.as_str(),
            outcome: report.outcome.as_str(),
            frames: report.frames,
        }
    }
}

/// Represents the strip state as seen by API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StripStatus {
    pub number_of_leds: usize,
    /// Whether frames reach a physical strip
    pub hardware: bool,
    /// Running animation, `None` when idle
    pub animation: Option<&'static str>,
    /// Frames committed since startup
    pub frames: u32,
    pub last_run: Option<LastRun>,
}

impl StripStatus {
    pub fn new(
        number_of_leds: usize,
        snapshot: StripSnapshot,
        last_report: Option<AnimationReport>,
    ) -> Self {
        Self {
            number_of_leds,
            hardware: snapshot.hardware,
            animation: snapshot.animation.map(|kind| kind.as_str()),
            frames: snapshot.frames,
            last_run: last_report.map(LastRun::from),
        }
    }

    pub const fn is_running(&self) -> bool {
        self.animation.is_some()
    }
}
