//! DHT11 Temperature/Humidity Sensor Driver
//!
//! Bit-banged single-wire protocol on an open-drain pin with pull-up.
//!
//! ```text
//!  host start    sensor response       bit 0            bit 1
//! ‾‾\_______/‾‾‾\________/‾‾‾‾‾‾‾‾\_____/‾‾‾\______/‾‾‾‾‾‾‾\__ ...
//!    >=18 ms      80 us     80 us    50 us  26us  50 us  70 us
//! ```
//!
//! A frame is 40 bits, MSB first: humidity integer, humidity decimal,
//! temperature integer, temperature decimal, checksum. The DHT11 reports
//! whole units, so the decimal bytes only carry the temperature sign bit.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::EnvironmentSensor;
use crate::config::{DHT11_BIT_SAMPLE_US, DHT11_EDGE_TIMEOUT_US, DHT11_START_LOW_MS};
use crate::error::SensorError;
use crate::types::EnvReading;

/// Decode a raw 5-byte frame, verifying its checksum
///
/// A temperature integer byte above 127 is rejected as
/// [`SensorError::OutOfRange`].
pub fn decode_frame(frame: [u8; 5]) -> Result<EnvReading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    // The DHT11 measures 0-50 C; a set top bit is not a temperature
    let magnitude = i8::try_from(frame[2]).map_err(|_| SensorError::OutOfRange)?;
    let temperature_c = if frame[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(EnvReading {
        temperature_c,
        humidity_pct: frame[0],
    })
}

/// DHT11 on an open-drain data pin
pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Create a driver and release the bus (idle high)
    pub fn new(mut pin: P, delay: D) -> Result<Self, SensorError> {
        pin.set_high().map_err(|_| SensorError::Pin)?;
        Ok(Self { pin, delay })
    }

    /// Run one full transaction and return the raw frame
    pub fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Start signal
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_ms(DHT11_START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;

        // Sensor response: low 80 us, high 80 us, then the first bit preamble
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            self.wait_for(true)?;
            self.delay.delay_us(DHT11_BIT_SAMPLE_US);
            if self.is_high()? {
                frame[bit / 8] |= 0x80 >> (bit % 8);
                self.wait_for(false)?;
            }
        }

        Ok(frame)
    }

    fn is_high(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::Pin)
    }

    /// Poll until the line reaches `high`, in 1 us steps
    fn wait_for(&mut self, high: bool) -> Result<(), SensorError> {
        for _ in 0..DHT11_EDGE_TIMEOUT_US {
            if self.is_high()? == high {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        Err(SensorError::Timeout)
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> EnvironmentSensor for Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn measure(&mut self) -> Result<EnvReading, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(frame)
    }
}
