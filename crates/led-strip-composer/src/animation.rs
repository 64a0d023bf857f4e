//! Animation requests and the commands accepted by the engine

use embassy_time::Duration;

use crate::color::Rgb;

/// A single animation request with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animation {
    /// Fill the whole strip with one color
    Solid(Rgb),
    /// Moving hue gradient across the strip, 256 frames
    Rainbow,
    /// Whole-strip color cycle through the wheel from 0 to 255
    RainbowAscending,
    /// Whole-strip color cycle through the wheel from 255 to 0
    RainbowDescending,
    /// Fill the strip with a random wheel color
    RandomColor,
    /// White strobe with default timings
    Strobe { duration: Duration },
    /// White strobe with caller-supplied timings
    StrobeControlled {
        duration: Duration,
        on_time: Duration,
        off_time: Duration,
    },
    /// Strobe with a fresh random wheel color on every flash
    RandomStrobe { duration: Duration },
    /// Lit window sweeping back and forth, `loops + 1` times
    KnightRider {
        color: Rgb,
        loops: u32,
        length: usize,
    },
}

impl Animation {
    pub const fn kind(&self) -> AnimationKind {
        match self {
            Self::Solid(_) => AnimationKind::Solid,
            Self::Rainbow => AnimationKind::Rainbow,
            Self::RainbowAscending => AnimationKind::RainbowAscending,
            Self::RainbowDescending => AnimationKind::RainbowDescending,
            Self::RandomColor => AnimationKind::RandomColor,
            Self::Strobe { .. } => AnimationKind::Strobe,
            Self::StrobeControlled { .. } => AnimationKind::StrobeControlled,
            Self::RandomStrobe { .. } => AnimationKind::RandomStrobe,
            Self::KnightRider { .. } => AnimationKind::KnightRider,
        }
    }
}

/// Animation identifier for external observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationKind {
    Solid = 1,
    Rainbow = 2,
    RainbowAscending = 3,
    RainbowDescending = 4,
    RandomColor = 5,
    Strobe = 6,
    StrobeControlled = 7,
    RandomStrobe = 8,
    KnightRider = 9,
}

impl AnimationKind {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Solid,
            2 => Self::Rainbow,
            3 => Self::RainbowAscending,
            4 => Self::RainbowDescending,
            5 => Self::RandomColor,
            6 => Self::Strobe,
            7 => Self::StrobeControlled,
            8 => Self::RandomStrobe,
            9 => Self::KnightRider,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Rainbow => "rainbow",
            Self::RainbowAscending => "rainbow_ascending",
            Self::RainbowDescending => "rainbow_descending",
            Self::RandomColor => "random_color",
            Self::Strobe => "strobe",
            Self::StrobeControlled => "strobe_controlled",
            Self::RandomStrobe => "random_strobe",
            Self::KnightRider => "knight_rider",
        }
    }
}

/// Commands that can be sent to the animation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripCommand {
    /// Replace whatever is running with a new animation
    Play(Animation),
    /// Stop the running animation, keep the last frame
    Cancel,
    /// Stop the running animation and black out the strip
    TurnOff,
}
