use std::io;

use led_strip_composer::SmartLedsDriver;
use linux_embedded_hal::{
    SpidevBus,
    spidev::{SpiModeFlags, Spidev, SpidevOptions},
};
use ws2812_spi::Ws2812;

/// WS2812 strip driven through a Linux spidev bus
pub type SpiLedDriver = SmartLedsDriver<Ws2812<SpidevBus>>;

/// Open and configure `path` for WS2812 output.
///
/// `speed_hz` should stay between 2 and 3.8 MHz for the encoder to meet
/// the strip's bit timings.
pub fn open_spi_driver(path: &str, speed_hz: u32) -> io::Result<SpiLedDriver> {
    let mut spidev = Spidev::open(path)?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(speed_hz)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spidev.configure(&options)?;

    Ok(SmartLedsDriver::new(Ws2812::new(SpidevBus(spidev))))
}
