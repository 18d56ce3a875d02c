//! Peripheral Drivers
//!
//! Drivers for the external parts on the board: the SSD1306 OLED,
//! the WS2812 RGB chain and the DHT11 sensor.

pub mod dht11;
pub mod display;
pub mod rgb;
pub mod ws2812;

use crate::error::SensorError;
use crate::types::EnvReading;

/// On-demand temperature/humidity sensor
pub trait EnvironmentSensor {
    /// Take one blocking sample
    fn measure(&mut self) -> Result<EnvReading, SensorError>;
}
