use embassy_time::Duration;
use led_strip_composer::{Animation, Rgb, StripCommand};

use crate::domain::{
    entity::StripStatus,
    ports::{
        InvalidInput, LedStripChanger, LedStripHandler, LedStripReader,
        LedStripUsecasesPort, StripError,
    },
};

/// Device facade: validates requests and hands them to the strip
pub struct LedStripUsecases<S: LedStripHandler> {
    strip: S,
}

impl<S: LedStripHandler> LedStripUsecases<S> {
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    fn play(&self, animation: Animation) {
        log::info!("strip: play {:?}", animation);
        self.strip.send_command(StripCommand::Play(animation));
    }

    fn check_duration(seconds: u32) -> Result<Duration, StripError> {
        if seconds == 0 {
            return Err(InvalidInput::ZeroDuration.into());
        }
        Ok(Duration::from_secs(u64::from(seconds)))
    }

    fn check_sweep_length(&self, length: usize) -> Result<(), StripError> {
        if length == 0 {
            return Err(InvalidInput::ZeroSweepLength.into());
        }
        let number_of_leds = self.strip.number_of_leds();
        if length > number_of_leds {
            return Err(InvalidInput::SweepTooLong {
                length,
                number_of_leds,
            }
            .into());
        }
        Ok(())
    }
}

impl<S: LedStripHandler> LedStripReader for LedStripUsecases<S> {
    fn number_of_leds(&self) -> usize {
        self.strip.number_of_leds()
    }

    fn status(&self) -> StripStatus {
        self.strip.status()
    }
}

impl<S: LedStripHandler> LedStripUsecasesPort for LedStripUsecases<S> {
    fn turn_on(&self, color: Rgb) {
        self.play(Animation::Solid(color));
    }

    fn turn_off(&self) {
        log::info!("strip: turn off");
        self.strip.send_command(StripCommand::TurnOff);
    }

    fn stop(&self) {
        log::info!("strip: stop");
        self.strip.send_command(StripCommand::TurnOff);
    }

    fn freeze(&self) {
        log::info!("strip: freeze");
        self.strip.send_command(StripCommand::Cancel);
    }

    fn rainbow(&self) {
        self.play(Animation::Rainbow);
    }

    fn rainbow_ascending(&self) {
        self.play(Animation::RainbowAscending);
    }

    fn rainbow_descending(&self) {
        self.play(Animation::RainbowDescending);
    }

    fn random_color(&self) {
        self.play(Animation::RandomColor);
    }

    fn strobe(&self, seconds: u32) -> Result<(), StripError> {
        let duration = Self::check_duration(seconds)?;
        self.play(Animation::Strobe { duration });
        Ok(())
    }

    fn strobe_controlled(
        &self,
        seconds: u32,
        on_ms: u32,
        off_ms: u32,
    ) -> Result<(), StripError> {
        let duration = Self::check_duration(seconds)?;
        self.play(Animation::StrobeControlled {
            duration,
            on_time: Duration::from_millis(u64::from(on_ms)),
            off_time: Duration::from_millis(u64::from(off_ms)),
        });
        Ok(())
    }

    fn random_strobe(&self, seconds: u32) -> Result<(), StripError> {
        let duration = Self::check_duration(seconds)?;
        self.play(Animation::RandomStrobe { duration });
        Ok(())
    }

    fn knight_rider(
        &self,
        color: Rgb,
        loops: u32,
        length: usize,
    ) -> Result<(), StripError> {
        self.check_sweep_length(length)?;
        self.play(Animation::KnightRider {
            color,
            loops,
            length,
        });
        Ok(())
    }
}
