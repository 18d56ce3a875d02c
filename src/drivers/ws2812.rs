//! WS2812 Driver
//!
//! Shapes the WS2812 single-wire waveform with the MOSI line of an SPI bus.
//! At 2.4 MHz every SPI bit lasts ~417 ns, so each LED bit is sent as three
//! SPI bits: `110` for a one, `100` for a zero. Colors go out in GRB order,
//! followed by a low period long enough to latch the chain.

use embedded_hal::spi::SpiBus;
use heapless::Vec;
use smart_leds::{SmartLedsWrite, RGB8};

/// Encoded bytes per LED (24 bits x 3)
pub const BYTES_PER_LED: usize = 9;

/// Zero bytes sent after the frame (~66 us low at 2.4 MHz)
pub const RESET_BYTES: usize = 20;

/// Staging buffer size; flushed to the bus whenever full
const STAGING: usize = BYTES_PER_LED * 7;

/// Expand one color byte into its 24-bit SPI pattern
#[must_use]
pub const fn encode_byte(value: u8) -> [u8; 3] {
    let mut bits: u32 = 0;
    let mut i = 8;
    while i > 0 {
        i -= 1;
        bits <<= 3;
        bits |= if value & (1 << i) != 0 { 0b110 } else { 0b100 };
    }
    [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]
}

/// WS2812 chain writer on an SPI bus
pub struct Ws2812Spi<SPI> {
    spi: SPI,
    staging: Vec<u8, STAGING>,
}

impl<SPI: SpiBus<u8>> Ws2812Spi<SPI> {
    /// Create a writer; the bus must already run at about 2.4 MHz, mode 0
    #[must_use]
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            staging: Vec::new(),
        }
    }

    fn push_led(&mut self, color: RGB8) -> Result<(), SPI::Error> {
        if self.staging.capacity() - self.staging.len() < BYTES_PER_LED {
            self.drain()?;
        }
        for channel in [color.g, color.r, color.b] {
            // Capacity was checked above
            let _ = self.staging.extend_from_slice(&encode_byte(channel));
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<(), SPI::Error> {
        if !self.staging.is_empty() {
            self.spi.write(&self.staging)?;
            self.staging.clear();
        }
        Ok(())
    }

    /// Release the underlying bus
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus<u8>> SmartLedsWrite for Ws2812Spi<SPI> {
    type Error = SPI::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.staging.clear();
        for item in iterator {
            self.push_led(item.into())?;
        }
        self.drain()?;
        self.spi.write(&[0u8; RESET_BYTES])?;
        self.spi.flush()
    }
}
