use embassy_time::{Duration, Instant, Timer};

use super::solid_fill;
use crate::{
    color::Rgb,
    driver::{DriverError, LedDriver},
    frame::FrameBuffer,
};

/// Flash the strip until `duration` has elapsed.
///
/// The deadline is fixed at entry and checked before every flash, so a zero
/// duration performs no flashes at all. `color` is asked for a new color on
/// every on-phase.
pub async fn strobe<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    duration: Duration,
    on_time: Duration,
    off_time: Duration,
    mut color: impl FnMut() -> Rgb,
) -> Result<(), DriverError> {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        solid_fill(frame, color())?;
        Timer::after(on_time).await;
        frame.clear()?;
        Timer::after(off_time).await;
    }
    Ok(())
}
