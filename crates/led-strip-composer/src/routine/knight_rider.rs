use embassy_time::{Duration, Timer};

use crate::{
    color::{BLACK, Rgb},
    driver::{DriverError, LedDriver},
    frame::FrameBuffer,
};

/// Sweep a lit window of `length` pixels across the strip and back.
///
/// Runs `loops + 1` forward/backward pairs. Each step lights the leading
/// pixel, blacks out the trailing one and commits. Positions outside the
/// strip are skipped.
#[allow(clippy::cast_possible_wrap)]
pub async fn knight_rider<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    color: Rgb,
    loops: u32,
    length: usize,
    step: Duration,
) -> Result<(), DriverError> {
    frame.clear()?;

    let led_count = frame.led_count() as isize;
    let length = length as isize;

    for _ in 0..=loops {
        for i in 0..=led_count + length {
            paint(frame, i, color);
            paint(frame, i - length, BLACK);
            frame.commit()?;
            Timer::after(step).await;
        }

        for i in (-length..=led_count + length).rev() {
            paint(frame, i, color);
            paint(frame, i + length, BLACK);
            frame.commit()?;
            Timer::after(step).await;
        }
    }
    Ok(())
}

fn paint<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    index: isize,
    color: Rgb,
) {
    if let Ok(index) = usize::try_from(index)
        && index < frame.led_count()
    {
        frame.set_pixel(index, color);
    }
}
