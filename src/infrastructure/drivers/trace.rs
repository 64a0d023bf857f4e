use std::fmt::Write as _;

use led_strip_composer::{DriverError, LedDriver, Rgb};

/// Driver for machines without a strip.
///
/// Every frame is formatted as hex triplets and logged at trace level.
#[derive(Debug, Default)]
pub struct TraceLedDriver {
    frames: u32,
}

impl TraceLedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl LedDriver for TraceLedDriver {
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError> {
        self.frames = self.frames.wrapping_add(1);
        if log::log_enabled!(log::Level::Trace) {
            let mut line = String::with_capacity(colors.len() * 7);
            for color in colors {
                let _ = write!(line, " {:02x}{:02x}{:02x}", color.r, color.g, color.b);
            }
            log::trace!("strip: frame {}:{}", self.frames, line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames() {
        let mut driver = TraceLedDriver::new();
        let frame = [Rgb { r: 1, g: 2, b: 3 }; 4];
        driver.write(&frame).unwrap();
        driver.write(&frame[..0]).unwrap();
        assert_eq!(driver.frames(), 2);
    }
}
