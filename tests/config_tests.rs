//! Config Module Tests
//!
//! Tests for board constants and pin assignments
//! Run with: cargo test --no-default-features --features std --test config_tests

use aiot_board::config::{self, pins};
use aiot_board::hal::pwm::BuzzerConfig;

#[test]
fn test_peripheral_counts() {
    assert_eq!(config::NUM_RELAYS, 2);
    assert_eq!(config::NUM_BUTTONS, 4);
    assert_eq!(config::NUM_RGB_LEDS, 2);
}

#[test]
fn test_display_geometry() {
    assert_eq!(config::DISPLAY_WIDTH, 128);
    assert_eq!(config::DISPLAY_HEIGHT, 64);
    assert_eq!(config::DISPLAY_I2C_ADDR, 0x3C);
    assert_eq!(config::I2C_FREQUENCY_HZ, 400_000);
}

#[test]
fn test_relay_pins() {
    assert_eq!(pins::RELAYS, [14, 27]);
}

#[test]
fn test_button_pins() {
    assert_eq!(pins::BUTTONS, [15, 2, 0, 4]);
}

#[test]
fn test_single_pin_assignments() {
    assert_eq!(pins::BUZZER, 32);
    assert_eq!(pins::RGB_DATA, 23);
    assert_eq!(pins::DHT11, 13);
    assert_eq!(pins::POTENTIOMETER, 39);
    assert_eq!(pins::LIGHT_SENSOR, 36);
    assert_eq!(pins::I2C_SCL, 22);
    assert_eq!(pins::I2C_SDA, 21);
}

#[test]
fn test_no_pin_used_twice() {
    let mut all = vec![
        pins::BUZZER,
        pins::RGB_DATA,
        pins::DHT11,
        pins::POTENTIOMETER,
        pins::LIGHT_SENSOR,
        pins::I2C_SCL,
        pins::I2C_SDA,
    ];
    all.extend_from_slice(&pins::RELAYS);
    all.extend_from_slice(&pins::BUTTONS);

    let count = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), count);
}

#[test]
fn test_buzzer_defaults() {
    let cfg = BuzzerConfig::default();
    assert_eq!(cfg.frequency_hz, 500);
    assert_eq!(cfg.duty_percent, 0);
}

#[test]
fn test_dht11_timing() {
    // Start pulse must exceed the 18 ms datasheet minimum
    assert!(config::DHT11_START_LOW_MS >= 18);
    // Sample point sits between a zero bit (28 us) and a one bit (70 us)
    assert!(config::DHT11_BIT_SAMPLE_US > 28 && config::DHT11_BIT_SAMPLE_US < 70);
    assert!(config::DHT11_MIN_INTERVAL_MS >= 1_000);
}

#[test]
fn test_ws2812_timing() {
    // Three SPI bits per LED bit at 800 kHz
    assert_eq!(config::WS2812_SPI_FREQUENCY_HZ, 3 * 800_000);
}

#[test]
fn test_self_test_constants() {
    assert_eq!(config::SELF_TEST_PAUSE_MS, 1_000);
    assert_eq!(config::SELF_TEST_TEXT, "Test");
}
