use std::net::IpAddr;

use clap::{Parser, ValueEnum};
use embassy_time::Duration;
use led_strip_composer::AnimationTimings;

/// Frame buffer capacity, the largest strip the controller can drive
pub const LED_COUNT_MAX: usize = 300;

pub(crate) const DEFAULT_LED_COUNT: usize = 60;
pub(crate) const DEFAULT_HTTP_PORT: u16 = 8080;
pub(crate) const DEFAULT_SPI_DEVICE: &str = "/dev/spidev0.0";
/// WS2812 over SPI needs roughly 3.8 MHz to encode one bit per nibble
pub(crate) const DEFAULT_SPI_SPEED_HZ: u32 = 3_800_000;

/// Socket read/write timeout for HTTP connections
pub const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

pub const ANIMATION_TIMINGS: AnimationTimings = AnimationTimings {
    frame_interval: Duration::from_millis(10),
    strobe_on: Duration::from_millis(30),
    strobe_off: Duration::from_millis(90),
    sweep_step: Duration::from_millis(5),
};

/// Where committed frames go
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// No hardware, frames are rendered and dropped
    Simulation,
    /// Every frame is written to the log at trace level
    Trace,
    /// WS2812 strip on a spidev bus
    Spi,
}

/// LED strip HTTP controller
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Number of LEDs on the strip
    #[arg(
        long = "led-count",
        env = "LED_STRIP_COUNT",
        default_value_t = DEFAULT_LED_COUNT,
        value_parser = parse_led_count,
    )]
    pub led_count: usize,

    /// Address the HTTP server listens on
    #[arg(long = "bind", env = "LED_STRIP_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port the HTTP server listens on
    #[arg(long = "port", env = "LED_STRIP_PORT", default_value_t = DEFAULT_HTTP_PORT)]
    pub port: u16,

    /// Frame transport
    #[arg(
        long = "transport",
        env = "LED_STRIP_TRANSPORT",
        value_enum,
        default_value_t = Transport::Simulation,
    )]
    pub transport: Transport,

    /// spidev device used by the spi transport
    #[arg(
        long = "spi-device",
        env = "LED_STRIP_SPI_DEVICE",
        value_name = "PATH",
        default_value = DEFAULT_SPI_DEVICE,
    )]
    pub spi_device: String,

    /// SPI clock used by the spi transport
    #[arg(
        long = "spi-speed-hz",
        env = "LED_STRIP_SPI_SPEED_HZ",
        default_value_t = DEFAULT_SPI_SPEED_HZ,
    )]
    pub spi_speed_hz: u32,
}

fn parse_led_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if count > LED_COUNT_MAX {
        return Err(format!("at most {LED_COUNT_MAX} leds are supported"));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["led-strip-controller"]).unwrap();
        assert_eq!(config.led_count, DEFAULT_LED_COUNT);
        assert_eq!(config.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.transport, Transport::Simulation);
        assert_eq!(config.spi_device, DEFAULT_SPI_DEVICE);
        assert!(config.bind.is_unspecified());
    }

    #[test]
    fn led_count_is_bounded() {
        let config =
            AppConfig::try_parse_from(["led-strip-controller", "--led-count", "300"])
                .unwrap();
        assert_eq!(config.led_count, LED_COUNT_MAX);

        assert!(
            AppConfig::try_parse_from(["led-strip-controller", "--led-count", "301"])
                .is_err()
        );
        assert!(
            AppConfig::try_parse_from(["led-strip-controller", "--led-count", "-1"])
                .is_err()
        );
    }

    #[test]
    fn transport_by_name() {
        let config =
            AppConfig::try_parse_from(["led-strip-controller", "--transport", "trace"])
                .unwrap();
        assert_eq!(config.transport, Transport::Trace);
    }
}
