//! Board configuration and hardware constants
//!
//! This module defines compile-time constants for the AIoT development board.
//! All pin mappings, peripheral counts, and default settings are centralized here.

/// Board name printed at startup
pub const BOARD_NAME: &str = "KMITL AIoT Development Board Version 1";

/// Project page printed at startup
pub const BOARD_URL: &str = "https://github.com/PerfecXX/AIoT_MicroPythonAPI";

/// Number of relays on the board
pub const NUM_RELAYS: usize = 2;

/// Number of push-buttons on the board
pub const NUM_BUTTONS: usize = 4;

/// Number of addressable RGB LEDs in the chain
pub const NUM_RGB_LEDS: usize = 2;

/// I2C bus frequency for the OLED display
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// SSD1306 OLED I2C address
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Default buzzer PWM frequency
pub const BUZZER_FREQUENCY_HZ: u32 = 500;

/// Default buzzer duty cycle in percent (silent)
pub const BUZZER_DUTY_PERCENT: u8 = 0;

/// SPI clock used to shape the WS2812 bit stream (3 SPI bits per LED bit)
pub const WS2812_SPI_FREQUENCY_HZ: u32 = 2_400_000;

/// ADC full-scale reading (12-bit)
pub const ADC_MAX: u16 = 4095;

/// DHT11 start signal low time in milliseconds (datasheet minimum 18 ms)
pub const DHT11_START_LOW_MS: u32 = 20;

/// DHT11 minimum interval between samples in milliseconds
pub const DHT11_MIN_INTERVAL_MS: u32 = 1_000;

/// Longest wait for any DHT11 edge in microseconds
pub const DHT11_EDGE_TIMEOUT_US: u32 = 100;

/// Delay after a data bit's rising edge before sampling it
///
/// A zero bit stays high 26-28 us, a one bit 70 us.
pub const DHT11_BIT_SAMPLE_US: u32 = 40;

/// Self-test pause between "LEDs red" and "LEDs off" in milliseconds
pub const SELF_TEST_PAUSE_MS: u32 = 1_000;

/// Placeholder text written to the display by the self-test
pub const SELF_TEST_TEXT: &str = "Test";

/// Pin assignments for GPIO
pub mod pins {
    //! ESP32 GPIO numbers matching the board silkscreen

    /// Relay 1 output
    pub const RELAY1: u8 = 14;

    /// Relay 2 output
    pub const RELAY2: u8 = 27;

    /// Buzzer output
    pub const BUZZER: u8 = 32;

    /// WS2812 data line (2 LEDs)
    pub const RGB_DATA: u8 = 23;

    /// DHT11 single-wire data line
    pub const DHT11: u8 = 13;

    /// Button 1 input (pull-up, active low)
    pub const BUTTON1: u8 = 15;

    /// Button 2 input (pull-up, active low)
    pub const BUTTON2: u8 = 2;

    /// Button 3 input (pull-up, active low)
    pub const BUTTON3: u8 = 0;

    /// Button 4 input (pull-up, active low)
    pub const BUTTON4: u8 = 4;

    /// Potentiometer (ADC1)
    pub const POTENTIOMETER: u8 = 39;

    /// Light dependent resistor (ADC1)
    pub const LIGHT_SENSOR: u8 = 36;

    /// Display I2C SCL
    pub const I2C_SCL: u8 = 22;

    /// Display I2C SDA
    pub const I2C_SDA: u8 = 21;

    /// Buttons in board order (button 1 first)
    pub const BUTTONS: [u8; super::NUM_BUTTONS] = [BUTTON1, BUTTON2, BUTTON3, BUTTON4];

    /// Relays in board order (relay 1 first)
    pub const RELAYS: [u8; super::NUM_RELAYS] = [RELAY1, RELAY2];
}
