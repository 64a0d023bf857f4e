//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip transports,
//! allowing the animation engine to be hardware-agnostic.

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Error raised by a transport while pushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The transport rejected or failed to transmit the frame
    WriteFailed,
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait.
pub trait LedDriver {
    /// Write one frame to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError>;
}

impl<D: LedDriver + ?Sized> LedDriver for &mut D {
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError> {
        (**self).write(colors)
    }
}

/// Adapter for any [`smart_leds`] writer (SPI, RMT, bit-banged, ...)
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> LedDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError> {
        self.writer
            .write(colors.iter().copied())
            .map_err(|_| DriverError::WriteFailed)
    }
}
