//! Board error taxonomy
//!
//! Every fallible facade operation returns [`BoardResult`]. Driver-specific
//! errors are mapped into [`BoardError`] at the facade boundary so callers
//! only ever match on one type.

use core::fmt;

/// Board peripheral identifier, used to tag errors and log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peripheral {
    /// SSD1306 OLED display
    Display,
    /// Relay outputs
    Relay,
    /// Piezo buzzer
    Buzzer,
    /// WS2812 RGB LED chain
    RgbLed,
    /// DHT11 temperature/humidity sensor
    EnvSensor,
    /// Push-buttons
    Button,
    /// Potentiometer ADC channel
    Potentiometer,
    /// Light sensor ADC channel
    LightSensor,
}

impl Peripheral {
    /// Human-readable peripheral name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Relay => "relay",
            Self::Buzzer => "buzzer",
            Self::RgbLed => "rgb led",
            Self::EnvSensor => "dht11",
            Self::Button => "button",
            Self::Potentiometer => "potentiometer",
            Self::LightSensor => "light sensor",
        }
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Peripheral {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Failure of a single environmental sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not answer, or a bit edge never arrived
    Timeout,
    /// The 40-bit frame arrived but its checksum byte does not match
    Checksum,
    /// The data pin could not be driven or read
    Pin,
    /// The frame checks out but holds a value the sensor cannot produce
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("sensor timeout"),
            Self::Checksum => f.write_str("sensor checksum mismatch"),
            Self::Pin => f.write_str("sensor pin error"),
            Self::OutOfRange => f.write_str("sensor value out of range"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Timeout => defmt::write!(f, "Timeout"),
            Self::Checksum => defmt::write!(f, "Checksum"),
            Self::Pin => defmt::write!(f, "Pin"),
            Self::OutOfRange => defmt::write!(f, "OutOfRange"),
        }
    }
}

/// Board facade error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Selector index outside the closed set for this peripheral
    InvalidSelector {
        /// Peripheral the selector was meant for
        peripheral: Peripheral,
        /// Rejected index as given by the caller
        index: i32,
    },
    /// Argument outside its documented range
    InvalidArgument(&'static str),
    /// Environmental sample failed
    SensorRead(SensorError),
    /// Peripheral failed to come up during board construction
    PeripheralInit(Peripheral),
    /// Digital or analog pin failed after construction
    Pin(Peripheral),
    /// Bus transfer (I2C, SPI, PWM) failed after construction
    Bus(Peripheral),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelector { peripheral, index } => {
                write!(f, "invalid {peripheral} selector: {index}")
            }
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::SensorRead(err) => write!(f, "sensor read failed: {err}"),
            Self::PeripheralInit(p) => write!(f, "{p} initialization failed"),
            Self::Pin(p) => write!(f, "{p} pin error"),
            Self::Bus(p) => write!(f, "{p} bus error"),
        }
    }
}

impl From<SensorError> for BoardError {
    fn from(err: SensorError) -> Self {
        Self::SensorRead(err)
    }
}

impl core::error::Error for BoardError {}

#[cfg(feature = "defmt")]
impl defmt::Format for BoardError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidSelector { peripheral, index } => {
                defmt::write!(f, "InvalidSelector({}, {})", peripheral, index);
            }
            Self::InvalidArgument(what) => defmt::write!(f, "InvalidArgument({=str})", what),
            Self::SensorRead(err) => defmt::write!(f, "SensorRead({})", err),
            Self::PeripheralInit(p) => defmt::write!(f, "PeripheralInit({})", p),
            Self::Pin(p) => defmt::write!(f, "Pin({})", p),
            Self::Bus(p) => defmt::write!(f, "Bus({})", p),
        }
    }
}

/// Board operation result
pub type BoardResult<T> = Result<T, BoardError>;
