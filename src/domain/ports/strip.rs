use core::fmt;

use led_strip_composer::{Rgb, StripCommand};

use crate::domain::entity::StripStatus;

/// Request rejected before reaching the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Strobe duration of zero seconds
    ZeroDuration,
    /// Knight rider window of zero pixels
    ZeroSweepLength,
    /// Knight rider window longer than the strip
    SweepTooLong { length: usize, number_of_leds: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration => write!(f, "duration must be at least one second"),
            Self::ZeroSweepLength => write!(f, "length of lights must be at least one"),
            Self::SweepTooLong {
                length,
                number_of_leds,
            } => write!(
                f,
                "too many lights requested {length}, the strip only has {number_of_leds}"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Request parameters failed validation
    InvalidInput(InvalidInput),
}

impl From<InvalidInput> for StripError {
    fn from(error: InvalidInput) -> Self {
        Self::InvalidInput(error)
    }
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => e.fmt(f),
        }
    }
}

/// Reader interface for the strip state
pub trait LedStripReader {
    /// Number of LEDs on the strip, fixed at startup
    fn number_of_leds(&self) -> usize;

    /// Get the current strip status
    fn status(&self) -> StripStatus;
}

/// Changer interface for the strip
pub trait LedStripChanger {
    /// Hand a command to the animation engine without waiting for it to run.
    ///
    /// Never fails, a full queue is waited out.
    fn send_command(&self, command: StripCommand);
}

/// Trait for the strip usecases state handler
pub trait LedStripHandler: LedStripReader + LedStripChanger + Sync + Send {}

/// Port interface for the strip usecases.
///
/// Every operation returns once the request is queued; animations run in
/// the background and replace whatever was running before. Only strobes and
/// the knight rider validate their parameters and can be rejected.
pub trait LedStripUsecasesPort: LedStripReader + Sync + Send {
    /// Fill the strip with one color
    fn turn_on(&self, color: Rgb);

    /// Stop any animation and black out the strip
    fn turn_off(&self);

    /// Stop any animation and black out the strip
    fn stop(&self);

    /// Stop any animation and keep its last frame
    fn freeze(&self);

    fn rainbow(&self);

    fn rainbow_ascending(&self);

    fn rainbow_descending(&self);

    fn random_color(&self);

    /// White strobe with default timings for `seconds`
    fn strobe(&self, seconds: u32) -> Result<(), StripError>;

    /// White strobe with custom on/off timings in milliseconds
    fn strobe_controlled(
        &self,
        seconds: u32,
        on_ms: u32,
        off_ms: u32,
    ) -> Result<(), StripError>;

    /// Strobe with a random color on every flash
    fn random_strobe(&self, seconds: u32) -> Result<(), StripError>;

    /// Sweep a window of `length` lit pixels back and forth `loops + 1` times
    fn knight_rider(
        &self,
        color: Rgb,
        loops: u32,
        length: usize,
    ) -> Result<(), StripError>;
}
