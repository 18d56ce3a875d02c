//! ADC Abstractions
//!
//! `embedded-hal` 1.0 has no ADC trait, so the board defines a minimal
//! one-shot channel trait that chip HALs implement for each analog pin.

use crate::config::ADC_MAX;

/// One-shot analog channel
pub trait AnalogChannel {
    /// Error reported by the underlying converter
    type Error: core::fmt::Debug;

    /// Take one blocking conversion, 12-bit right aligned
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Analog input (potentiometer, light sensor)
pub struct AnalogInput<C> {
    channel: C,
}

impl<C: AnalogChannel> AnalogInput<C> {
    /// Wrap an analog channel
    #[must_use]
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Read the raw value, clamped to the 12-bit range
    pub fn read(&mut self) -> Result<u16, C::Error> {
        self.channel.read_raw().map(|raw| raw.min(ADC_MAX))
    }

}
