//! I2C Bus Abstractions
//!
//! Blocking I2C wrapper for the OLED display, generic over
//! `embedded_hal::i2c::I2c`.

use embedded_hal::i2c::I2c;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// SSD1306 OLED display address
    pub const SSD1306: Self = Self(crate::config::DISPLAY_I2C_ADDR);

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// I2C bus wrapper owning the bus peripheral
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Write bytes to a device
    pub fn write(&mut self, addr: I2cAddress, data: &[u8]) -> Result<(), I::Error> {
        self.i2c.write(addr.addr(), data)
    }

    /// Release the underlying bus
    pub fn release(self) -> I {
        self.i2c
    }
}
