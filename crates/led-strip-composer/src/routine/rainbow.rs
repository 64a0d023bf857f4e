use embassy_time::{Duration, Timer};

use super::solid_fill;
use crate::{
    color::{WHEEL_SIZE, wheel},
    driver::{DriverError, LedDriver},
    frame::FrameBuffer,
};

/// Order in which [`rainbow_scroll`] walks the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Positions 0 through 255
    Ascending,
    /// Positions 255 down to 0
    Descending,
}

/// Moving hue gradient: 256 frames, frame `j` paints pixel `i` with
/// `wheel((i * 256 / led_count + j) % 256)`.
#[allow(clippy::cast_possible_truncation)]
pub async fn rainbow<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    interval: Duration,
) -> Result<(), DriverError> {
    let led_count = frame.led_count();
    for j in 0..WHEEL_SIZE {
        for i in 0..led_count {
            let position = (i * WHEEL_SIZE / led_count + j) % WHEEL_SIZE;
            frame.set_pixel(i, wheel(position as u8));
        }
        frame.commit()?;
        Timer::after(interval).await;
    }
    Ok(())
}

/// Whole-strip color cycle, one solid fill per wheel position
pub async fn rainbow_scroll<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    direction: ScrollDirection,
    interval: Duration,
) -> Result<(), DriverError> {
    for step in 0..=u8::MAX {
        let position = match direction {
            ScrollDirection::Ascending => step,
            ScrollDirection::Descending => u8::MAX - step,
        };
        solid_fill(frame, wheel(position))?;
        Timer::after(interval).await;
    }
    Ok(())
}
