#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use led_strip_composer::{DriverError, LedDriver, Rgb};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

pub type FrameLog = Rc<RefCell<Vec<Vec<Rgb>>>>;

/// Driver keeping a copy of every frame it receives
#[derive(Default)]
pub struct RecordingDriver {
    frames: FrameLog,
}

impl RecordingDriver {
    pub fn log(&self) -> FrameLog {
        Rc::clone(&self.frames)
    }
}

impl LedDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError> {
        self.frames.borrow_mut().push(colors.to_vec());
        Ok(())
    }
}

/// Driver that fails on one specific write (1-based)
pub struct FailingDriver {
    writes: u32,
    fail_on: u32,
}

impl FailingDriver {
    pub fn failing_on(fail_on: u32) -> Self {
        Self { writes: 0, fail_on }
    }
}

impl LedDriver for FailingDriver {
    fn write(&mut self, _colors: &[Rgb]) -> Result<(), DriverError> {
        self.writes += 1;
        if self.writes == self.fail_on {
            return Err(DriverError::WriteFailed);
        }
        Ok(())
    }
}

pub fn is_solid(frame: &[Rgb], color: Rgb) -> bool {
    frame.iter().all(|c| *c == color)
}
