//! AIoT Board Support Library
//!
//! This library exposes the on-board peripherals of the KMITL AIoT ESP32
//! development board through a single facade, [`board::Board`]: the
//! 128x64 OLED, two relays, a buzzer, two WS2812 RGB LEDs, four
//! push-buttons, a potentiometer, a light sensor and a DHT11
//! temperature/humidity sensor.
//!
//! # Architecture
//!
//! The library is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BOARD FACADE                            │
//! │  RGB  │  Relays  │  Buttons  │  DHT11  │  Display  │  Buzzer  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     DRIVER LAYER                             │
//! │  SSD1306  │  WS2812 (SPI)  │  RGB buffer  │  DHT11           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      HAL LAYER                               │
//! │  GPIO  │  ADC  │  I2C  │  PWM        (embedded-hal traits)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    CHIP SUPPORT                              │
//! │             esp-hal (ESP32, binary only)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Closed selectors**: relay, button and LED targets are enums, so an
//!   out-of-range index is rejected once, at the boundary
//! - **Generic over HAL traits**: the same facade runs on the ESP32 and
//!   against host-side mocks
//! - **Explicit error handling**: all fallible operations return `Result`
//! - **Single owner**: every peripheral is set up once and owned by the
//!   board for its whole lifetime

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export the chip HAL for the binary (only in embedded mode)
#[cfg(feature = "embedded")]
pub use esp_hal;

/// Hardware Abstraction Layer
///
/// Semantic wrappers over `embedded-hal` pins, buses and PWM channels.
pub mod hal;

/// Peripheral Drivers
///
/// SSD1306 display, WS2812 chain, RGB buffer and DHT11 sensor.
pub mod drivers;

/// Board Peripheral Facade
pub mod board;

/// Error taxonomy
pub mod error;

/// Shared types used across modules
pub mod types;

/// Board configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::board::{Board, BoardHal, BoardParts};
    pub use crate::error::{BoardError, BoardResult, Peripheral, SensorError};
    pub use crate::hal::pwm::BuzzerConfig;
    pub use crate::types::*;

    // Driver seams
    pub use crate::drivers::EnvironmentSensor;
    pub use crate::hal::adc::AnalogChannel;
}
