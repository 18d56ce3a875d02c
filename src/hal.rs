//! Hardware Abstraction Layer
//!
//! Thin wrappers that give semantic meaning to raw `embedded-hal` pins,
//! PWM channels and buses. Everything here is generic over the HAL traits
//! so the same code runs on the ESP32 and against host-side mocks.

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
