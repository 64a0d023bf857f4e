#![allow(dead_code)]

use std::{convert::Infallible, sync::Mutex};

use led_strip_composer::{Rgb, StripCommand, StripSnapshot};
use led_strip_controller::domain::{
    entity::StripStatus,
    ports::{LedStripChanger, LedStripHandler, LedStripReader},
};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Strip handler keeping every command it receives
pub struct RecordingStrip {
    number_of_leds: usize,
    commands: Mutex<Vec<StripCommand>>,
}

impl RecordingStrip {
    pub fn new(number_of_leds: usize) -> Self {
        Self {
            number_of_leds,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<StripCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl LedStripReader for &RecordingStrip {
    fn number_of_leds(&self) -> usize {
        self.number_of_leds
    }

    fn status(&self) -> StripStatus {
        let snapshot = StripSnapshot {
            animation: None,
            frames: 0,
            last_outcome: None,
            hardware: false,
        };
        StripStatus::new(self.number_of_leds, snapshot, None)
    }
}

impl LedStripChanger for &RecordingStrip {
    fn send_command(&self, command: StripCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl LedStripHandler for &RecordingStrip {}

/// In-memory connection: serves `input` to reads, collects writes
pub struct MemoryStream {
    input: Vec<u8>,
    position: usize,
    pub output: Vec<u8>,
}

impl MemoryStream {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            position: 0,
            output: Vec::new(),
        }
    }

    /// A bodyless request with the given method and path
    pub fn request(method: &str, path: &str) -> Self {
        Self::new(format!("{method} {path} HTTP/1.1\r\nHost: strip\r\n\r\n").as_bytes())
    }

    pub fn output_str(&self) -> &str {
        std::str::from_utf8(&self.output).unwrap()
    }

    /// Status code from the response line
    pub fn status(&self) -> u16 {
        self.output_str()
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .unwrap()
    }

    /// Response body after the blank line
    pub fn body(&self) -> &str {
        self.output_str()
            .split_once("\r\n\r\n")
            .map(|(_, body)| body)
            .unwrap()
    }
}

impl embedded_io::ErrorType for MemoryStream {
    type Error = Infallible;
}

impl embedded_io::Read for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let rest = &self.input[self.position..];
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.position += n;
        Ok(n)
    }
}

impl embedded_io::Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
