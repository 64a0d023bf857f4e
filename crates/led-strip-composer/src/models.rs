use crate::{animation::AnimationKind, driver::DriverError};

/// How a routine run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// Duration elapsed or loops exhausted
    Completed,
    /// Superseded by a new command before finishing
    Cancelled,
    /// The transport failed, the run was aborted
    Failed(DriverError),
}

impl AnimationOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed(_) => "failed",
        }
    }

    pub(crate) const fn as_raw(self) -> u8 {
        match self {
            Self::Completed => 1,
            Self::Cancelled => 2,
            Self::Failed(DriverError::WriteFailed) => 3,
        }
    }

    pub(crate) const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Completed,
            2 => Self::Cancelled,
            3 => Self::Failed(DriverError::WriteFailed),
            _ => return None,
        })
    }
}

/// Result of one routine run, published on the report channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationReport {
    pub kind: AnimationKind,
    pub outcome: AnimationOutcome,
    /// Frames committed during this run
    pub frames: u32,
}

/// A snapshot of the engine state for external systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSnapshot {
    /// Running animation, `None` when idle
    pub animation: Option<AnimationKind>,
    /// Total frames committed
    pub frames: u32,
    /// Outcome of the last finished run
    pub last_outcome: Option<AnimationOutcome>,
    /// Whether commits reach hardware
    pub hardware: bool,
}
