use rand::{Rng as _, rngs::SmallRng};

use crate::{
    color::{Rgb, wheel},
    driver::{DriverError, LedDriver},
    frame::FrameBuffer,
};

/// Clear the strip, then fill it with `color` and commit
pub fn solid_fill<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    color: Rgb,
) -> Result<(), DriverError> {
    frame.clear()?;
    frame.fill(color);
    frame.commit()
}

/// Fill the strip with a uniformly random wheel color
pub fn random_color<D: LedDriver, const N: usize>(
    frame: &mut FrameBuffer<'_, D, N>,
    rng: &mut SmallRng,
) -> Result<(), DriverError> {
    solid_fill(frame, wheel(rng.r#gen()))
}
