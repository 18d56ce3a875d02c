//! Shared types used across the board facade
//!
//! Selectors are closed enumerations: every value is a valid target, so
//! the facade never has to handle an out-of-range index. Raw integers
//! coming from user code are checked once, in the `TryFrom` impls.

use core::fmt;
use core::ops::Range;

use crate::config::{NUM_BUTTONS, NUM_RELAYS, NUM_RGB_LEDS};
use crate::error::{BoardError, BoardResult, Peripheral};

/// RGB triple, 0-255 per channel
pub type Rgb = smart_leds::RGB8;

/// Common colors
pub mod colors {
    //! Named colors for the RGB chain

    use super::Rgb;

    /// All channels off
    pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// Full red
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    /// Full green
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    /// Full blue
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    /// All channels full
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Build a color from wide integers, rejecting channels outside 0-255
pub fn rgb_from_ints(r: i32, g: i32, b: i32) -> BoardResult<Rgb> {
    let channel = |v: i32| {
        u8::try_from(v).map_err(|_| BoardError::InvalidArgument("color channel outside 0-255"))
    };
    Ok(Rgb {
        r: channel(r)?,
        g: channel(g)?,
        b: channel(b)?,
    })
}

/// A selector over a fixed bank of identical peripherals
pub trait BankSelector: Copy {
    /// Number of instances in the bank
    const COUNT: usize;

    /// Peripheral this selector addresses
    const PERIPHERAL: Peripheral;

    /// Zero-based slots covered by this selector
    fn slots(self) -> Range<usize>;
}

/// Relay selector (board labels 1 and 2)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelaySelector {
    /// Relay 1 (GPIO14)
    Relay1,
    /// Relay 2 (GPIO27)
    Relay2,
    /// Both relays
    All,
}

impl BankSelector for RelaySelector {
    const COUNT: usize = NUM_RELAYS;
    const PERIPHERAL: Peripheral = Peripheral::Relay;

    fn slots(self) -> Range<usize> {
        match self {
            Self::Relay1 => 0..1,
            Self::Relay2 => 1..2,
            Self::All => 0..Self::COUNT,
        }
    }
}

impl TryFrom<i32> for RelaySelector {
    type Error = BoardError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::Relay1),
            2 => Ok(Self::Relay2),
            _ => Err(BoardError::InvalidSelector {
                peripheral: Self::PERIPHERAL,
                index,
            }),
        }
    }
}

/// Push-button selector (board labels 1 to 4)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSelector {
    /// Button 1 (GPIO15)
    Button1,
    /// Button 2 (GPIO2)
    Button2,
    /// Button 3 (GPIO0)
    Button3,
    /// Button 4 (GPIO4)
    Button4,
    /// Any button
    All,
}

impl BankSelector for ButtonSelector {
    const COUNT: usize = NUM_BUTTONS;
    const PERIPHERAL: Peripheral = Peripheral::Button;

    fn slots(self) -> Range<usize> {
        match self {
            Self::Button1 => 0..1,
            Self::Button2 => 1..2,
            Self::Button3 => 2..3,
            Self::Button4 => 3..4,
            Self::All => 0..Self::COUNT,
        }
    }
}

impl TryFrom<i32> for ButtonSelector {
    type Error = BoardError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::Button1),
            2 => Ok(Self::Button2),
            3 => Ok(Self::Button3),
            4 => Ok(Self::Button4),
            _ => Err(BoardError::InvalidSelector {
                peripheral: Self::PERIPHERAL,
                index,
            }),
        }
    }
}

/// RGB LED selector (chain positions 0 and 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RgbSelector {
    /// First LED in the chain
    Led0,
    /// Second LED in the chain
    Led1,
    /// Both LEDs
    All,
}

impl BankSelector for RgbSelector {
    const COUNT: usize = NUM_RGB_LEDS;
    const PERIPHERAL: Peripheral = Peripheral::RgbLed;

    fn slots(self) -> Range<usize> {
        match self {
            Self::Led0 => 0..1,
            Self::Led1 => 1..2,
            Self::All => 0..Self::COUNT,
        }
    }
}

impl TryFrom<i32> for RgbSelector {
    type Error = BoardError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Led0),
            1 => Ok(Self::Led1),
            _ => Err(BoardError::InvalidSelector {
                peripheral: Self::PERIPHERAL,
                index,
            }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RelaySelector {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Relay1 => defmt::write!(f, "RELAY1"),
            Self::Relay2 => defmt::write!(f, "RELAY2"),
            Self::All => defmt::write!(f, "ALL"),
        }
    }
}

/// Which environmental quantity to return from a sample
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Measurement {
    /// Temperature only
    Temperature,
    /// Relative humidity only
    Humidity,
    /// Both, from the same sample
    #[default]
    All,
}

/// One DHT11 sample
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EnvReading {
    /// Temperature in degrees Celsius
    pub temperature_c: i8,
    /// Relative humidity in percent
    pub humidity_pct: u8,
}

impl EnvReading {
    /// Select the quantity asked for by `kind`
    #[must_use]
    pub const fn select(self, kind: Measurement) -> Reading {
        match kind {
            Measurement::Temperature => Reading::Temperature(self.temperature_c),
            Measurement::Humidity => Reading::Humidity(self.humidity_pct),
            Measurement::All => Reading::Both(self),
        }
    }
}

impl fmt::Display for EnvReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}C {}%RH", self.temperature_c, self.humidity_pct)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EnvReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}C {}%RH", self.temperature_c, self.humidity_pct);
    }
}

/// Result of `measure_environment`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reading {
    /// Temperature in degrees Celsius
    Temperature(i8),
    /// Relative humidity in percent
    Humidity(u8),
    /// Temperature and humidity
    Both(EnvReading),
}

impl Reading {
    /// Temperature, if this reading carries one
    #[must_use]
    pub const fn temperature(self) -> Option<i8> {
        match self {
            Self::Temperature(t) => Some(t),
            Self::Both(r) => Some(r.temperature_c),
            Self::Humidity(_) => None,
        }
    }

    /// Humidity, if this reading carries one
    #[must_use]
    pub const fn humidity(self) -> Option<u8> {
        match self {
            Self::Humidity(h) => Some(h),
            Self::Both(r) => Some(r.humidity_pct),
            Self::Temperature(_) => None,
        }
    }
}

/// 1-bit display color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PixelColor {
    /// Pixel cleared
    Off,
    /// Pixel lit
    #[default]
    On,
}

impl TryFrom<u8> for PixelColor {
    type Error = BoardError;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        match bit {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            _ => Err(BoardError::InvalidArgument("display color must be 0 or 1")),
        }
    }
}

impl From<PixelColor> for embedded_graphics::pixelcolor::BinaryColor {
    fn from(color: PixelColor) -> Self {
        match color {
            PixelColor::Off => Self::Off,
            PixelColor::On => Self::On,
        }
    }
}
