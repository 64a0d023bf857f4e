//! Animation routines
//!
//! Every routine mutates the frame buffer and commits it, holding between
//! frames with [`Timer`]. Those holds are the only suspension points, so a
//! routine future dropped by the engine stops exactly there and never in
//! the middle of a frame.

mod knight_rider;
mod rainbow;
mod solid;
mod strobe;

use embassy_time::Duration;
use rand::{Rng as _, rngs::SmallRng};

pub use knight_rider::knight_rider;
pub use rainbow::{ScrollDirection, rainbow, rainbow_scroll};
pub use solid::{random_color, solid_fill};
pub use strobe::strobe;

use crate::{
    animation::Animation,
    color::{WHITE, wheel},
    driver::{DriverError, LedDriver},
    frame::FrameBuffer,
};

/// Frame pacing used by the routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Hold between rainbow frames
    pub frame_interval: Duration,
    /// Default strobe on-phase
    pub strobe_on: Duration,
    /// Default strobe off-phase
    pub strobe_off: Duration,
    /// Hold between knight rider steps
    pub sweep_step: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(10),
            strobe_on: Duration::from_millis(30),
            strobe_off: Duration::from_millis(90),
            sweep_step: Duration::from_millis(5),
        }
    }
}

/// Run `animation` to completion against `frame`
pub async fn play<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    rng: &mut SmallRng,
    timings: &AnimationTimings,
    animation: &Animation,
) -> Result<(), DriverError> {
    match *animation {
        Animation::Solid(color) => solid_fill(frame, color),
        Animation::Rainbow => rainbow(frame, timings.frame_interval).await,
        Animation::RainbowAscending => {
            rainbow_scroll(frame, ScrollDirection::Ascending, timings.frame_interval)
                .await
        }
        Animation::RainbowDescending => {
            rainbow_scroll(frame, ScrollDirection::Descending, timings.frame_interval)
                .await
        }
        Animation::RandomColor => random_color(frame, rng),
        Animation::Strobe { duration } => {
            strobe(frame, duration, timings.strobe_on, timings.strobe_off, || WHITE)
                .await
        }
        Animation::StrobeControlled {
            duration,
            on_time,
            off_time,
        } => strobe(frame, duration, on_time, off_time, || WHITE).await,
        Animation::RandomStrobe { duration } => {
            strobe(frame, duration, timings.strobe_on, timings.strobe_off, || {
                wheel(rng.r#gen())
            })
            .await
        }
        Animation::KnightRider {
            color,
            loops,
            length,
        } => knight_rider(frame, color, loops, length, timings.sweep_step).await,
    }
}
