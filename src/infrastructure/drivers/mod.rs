mod random;
#[cfg(feature = "spidev")]
mod spi;
mod trace;

use std::io;

use led_strip_composer::{DriverError, LedDriver, Rgb};

pub(crate) use random::get_seed;
#[cfg(feature = "spidev")]
pub use spi::{SpiLedDriver, open_spi_driver};
pub use trace::TraceLedDriver;

use crate::config::{AppConfig, Transport};

/// Transport selected at startup
pub enum StripDriver {
    Trace(TraceLedDriver),
    #[cfg(feature = "spidev")]
    Spi(SpiLedDriver),
}

impl LedDriver for StripDriver {
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError> {
        match self {
            Self::Trace(driver) => driver.write(colors),
            #[cfg(feature = "spidev")]
            Self::Spi(driver) => driver.write(colors),
        }
    }
}

/// Open the configured transport.
///
/// Returns `None` in simulation, where frames never leave the process.
pub fn init_strip_driver(config: &AppConfig) -> io::Result<Option<StripDriver>> {
    match config.transport {
        Transport::Simulation => Ok(None),
        Transport::Trace => Ok(Some(StripDriver::Trace(TraceLedDriver::new()))),
        Transport::Spi => open_spi(config),
    }
}

#[cfg(feature = "spidev")]
fn open_spi(config: &AppConfig) -> io::Result<Option<StripDriver>> {
    let driver = open_spi_driver(&config.spi_device, config.spi_speed_hz)?;
    log::info!(
        "strip: ws2812 on {} at {} Hz",
        config.spi_device,
        config.spi_speed_hz
    );
    Ok(Some(StripDriver::Spi(driver)))
}

#[cfg(not(feature = "spidev"))]
fn open_spi(_config: &AppConfig) -> io::Result<Option<StripDriver>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "spi transport requires the `spidev` feature",
    ))
}
