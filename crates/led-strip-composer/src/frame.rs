//! Frame buffer
//!
//! Holds one color per LED and pushes it to the transport on commit.
//! A buffer without a transport is the simulation stub: commits succeed
//! and never reach a driver.

use crate::{
    color::{BLACK, Rgb},
    driver::{DriverError, LedDriver},
    state::SharedState,
};

pub struct FrameBuffer<'a, D: LedDriver, const N: usize> {
    pixels: [Rgb; N],
    led_count: usize,
    transport: Option<D>,
    frames: u32,
    transport_writes: u32,
    /// Receives the frame total after every successful commit
    observer: Option<&'a SharedState>,
}

impl<'a, D: LedDriver, const N: usize> FrameBuffer<'a, D, N> {
    /// Create a frame buffer bound to a transport
    pub fn new(transport: D, led_count: usize) -> Self {
        Self::with_transport(Some(transport), led_count)
    }

    /// Create a frame buffer without hardware
    pub fn simulated(led_count: usize) -> Self {
        Self::with_transport(None, led_count)
    }

    /// Create a frame buffer with an optional transport.
    ///
    /// `led_count` is clamped to the buffer capacity `N`.
    pub fn with_transport(transport: Option<D>, led_count: usize) -> Self {
        if led_count > N {
            log::warn!(
                "frame: led count {} exceeds capacity {}, clamping",
                led_count,
                N
            );
        }
        Self {
            pixels: [BLACK; N],
            led_count: led_count.min(N),
            transport,
            frames: 0,
            transport_writes: 0,
            observer: None,
        }
    }

    /// Publish the frame total to `state` on every commit
    pub fn observe(&mut self, state: &'a SharedState) {
        state.set_frames(self.frames);
        self.observer = Some(state);
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Whether commits reach a physical transport
    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// Current pixel colors
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.led_count]
    }

    /// Number of successful commits since construction
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Number of commits that were written to the transport
    pub fn transport_writes(&self) -> u32 {
        self.transport_writes
    }

    /// Store a color at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Self::led_count`].
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        assert!(
            index < self.led_count,
            "pixel index {index} out of range for {} leds",
            self.led_count
        );
        self.pixels[index] = color;
    }

    /// Set every pixel to `color` without committing
    pub fn fill(&mut self, color: Rgb) {
        self.pixels[..self.led_count].fill(color);
    }

    /// Black out every pixel and commit
    pub fn clear(&mut self) -> Result<(), DriverError> {
        self.fill(BLACK);
        self.commit()
    }

    /// Push the current buffer to the transport.
    ///
    /// A failed write is not counted as a frame.
    pub fn commit(&mut self) -> Result<(), DriverError> {
        if let Some(transport) = self.transport.as_mut() {
            transport.write(&self.pixels[..self.led_count])?;
            self.transport_writes = self.transport_writes.wrapping_add(1);
        }
        self.frames = self.frames.wrapping_add(1);
        if let Some(state) = self.observer {
            state.set_frames(self.frames);
        }
        Ok(())
    }

    /// Borrow the transport, if any
    pub fn transport(&self) -> Option<&D> {
        self.transport.as_ref()
    }
}
