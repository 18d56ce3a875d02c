//! AIoT Board Self-Test Application
//!
//! Entry point for the ESP32 firmware. Wires the `esp-hal` peripherals
//! into the board facade, runs the power-on self-test, then mirrors
//! buttons 1 and 2 onto the relays and shows the climate on the OLED.

#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt::Write;

use critical_section::Mutex;
use defmt::{info, warn};
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use esp_backtrace as _;
use esp_hal::analog::adc::{Adc, AdcChannel, AdcConfig, AdcPin, Attenuation};
use esp_hal::delay::Delay;
use esp_hal::gpio::{
    DriveMode, Flex, Input, InputConfig, InputPin, Level, Output, OutputConfig, Pull,
};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{ADC1, GPIO36, GPIO39};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::{main, Blocking};
use esp_println as _;
use heapless::String;

use aiot_board::config::{DHT11_MIN_INTERVAL_MS, I2C_FREQUENCY_HZ, WS2812_SPI_FREQUENCY_HZ};
use aiot_board::drivers::dht11::Dht11;
use aiot_board::drivers::display::LINE_HEIGHT;
use aiot_board::drivers::ws2812::Ws2812Spi;
use aiot_board::prelude::*;

esp_bootloader_esp_idf::esp_app_desc!();

type Adc1 = Adc<'static, ADC1<'static>, Blocking>;

/// ADC1 is shared by the potentiometer and the light sensor
static ADC1_UNIT: Mutex<RefCell<Option<Adc1>>> = Mutex::new(RefCell::new(None));

/// ADC1 has not been installed yet, or a conversion failed
#[derive(Debug)]
struct AdcUnavailable;

/// One analog pin on the shared ADC1 unit
struct SharedAdcChannel<P>(AdcPin<P, ADC1<'static>>);

impl<P: AdcChannel> AnalogChannel for SharedAdcChannel<P> {
    type Error = AdcUnavailable;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        critical_section::with(|cs| {
            let mut unit = ADC1_UNIT.borrow_ref_mut(cs);
            let adc = unit.as_mut().ok_or(AdcUnavailable)?;
            nb::block!(adc.read_oneshot(&mut self.0)).map_err(|()| AdcUnavailable)
        })
    }
}

/// Buzzer on a plain GPIO: any non-zero duty drives the pin high
struct GpioBuzzer(Output<'static>);

impl ErrorType for GpioBuzzer {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for GpioBuzzer {
    fn max_duty_cycle(&self) -> u16 {
        100
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set_level(if duty > 0 { Level::High } else { Level::Low });
        Ok(())
    }
}

/// ESP32 peripheral types
struct Esp32;

impl BoardHal for Esp32 {
    type RelayPin = Output<'static>;
    type ButtonPin = Input<'static>;
    type BuzzerPwm = GpioBuzzer;
    type LedWriter = Ws2812Spi<Spi<'static, Blocking>>;
    type EnvSensor = Dht11<Flex<'static>, Delay>;
    type Potentiometer = SharedAdcChannel<GPIO39<'static>>;
    type LightSensor = SharedAdcChannel<GPIO36<'static>>;
    type DisplayBus = I2c<'static, Blocking>;
}

/// Main entry point
#[main]
fn main() -> ! {
    info!("AIoT board firmware v{}", env!("CARGO_PKG_VERSION"));

    let p = esp_hal::init(esp_hal::Config::default());

    // OLED on I2C0: SDA GPIO21, SCL GPIO22
    let display_bus = I2c::new(
        p.I2C0,
        I2cConfig::default().with_frequency(Rate::from_hz(I2C_FREQUENCY_HZ)),
    )
    .expect("I2C0 config")
    .with_sda(p.GPIO21)
    .with_scl(p.GPIO22);

    // WS2812 chain on the SPI2 MOSI line (GPIO23)
    let led_bus = Spi::new(
        p.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_hz(WS2812_SPI_FREQUENCY_HZ))
            .with_mode(Mode::_0),
    )
    .expect("SPI2 config")
    .with_mosi(p.GPIO23);

    // DHT11 on GPIO13, open drain with pull-up
    let mut dht_pin = Flex::new(p.GPIO13);
    dht_pin.apply_output_config(
        &OutputConfig::default()
            .with_drive_mode(DriveMode::OpenDrain)
            .with_pull(Pull::Up),
    );
    dht_pin.set_input_enable(true);
    dht_pin.set_output_enable(true);
    let env_sensor = Dht11::new(dht_pin, Delay::new()).expect("DHT11 pin");

    // Potentiometer (GPIO39) and light sensor (GPIO36) on ADC1
    let mut adc_cfg = AdcConfig::new();
    let potentiometer = adc_cfg.enable_pin(p.GPIO39, Attenuation::_11dB);
    let light_sensor = adc_cfg.enable_pin(p.GPIO36, Attenuation::_11dB);
    let adc = Adc::new(p.ADC1, adc_cfg);
    critical_section::with(|cs| ADC1_UNIT.borrow_ref_mut(cs).replace(adc));

    let parts = BoardParts::<Esp32> {
        display_bus,
        relays: [
            Output::new(p.GPIO14, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO27, Level::Low, OutputConfig::default()),
        ],
        buzzer: GpioBuzzer(Output::new(p.GPIO32, Level::Low, OutputConfig::default())),
        buzzer_config: BuzzerConfig::default(),
        leds: Ws2812Spi::new(led_bus),
        env_sensor,
        buttons: [
            button(p.GPIO15),
            button(p.GPIO2),
            button(p.GPIO0),
            button(p.GPIO4),
        ],
        potentiometer: SharedAdcChannel(potentiometer),
        light_sensor: SharedAdcChannel(light_sensor),
    };

    let mut board = Board::new(parts).expect("board bring-up");
    let mut delay = Delay::new();

    if let Err(err) = board.self_test(&mut delay) {
        warn!("self-test failed: {}", err);
    }

    info!("Self-test done, entering main loop");

    loop {
        if let Err(err) = update(&mut board) {
            warn!("update failed: {}", err);
        }
        delay.delay_ms(DHT11_MIN_INTERVAL_MS);
    }
}

/// Push-button input: pull-up, pressed reads low
fn button(pin: impl InputPin + 'static) -> Input<'static> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Up))
}

/// One pass of the demo loop
fn update(board: &mut Board<Esp32>) -> BoardResult<()> {
    for (button, relay) in [
        (ButtonSelector::Button1, RelaySelector::Relay1),
        (ButtonSelector::Button2, RelaySelector::Relay2),
    ] {
        if board.is_button_pressed(button)? {
            board.relay_on(relay)?;
        } else {
            board.relay_off(relay)?;
        }
    }

    board.clear_display();

    let mut line: String<24> = String::new();
    match board.measure_environment(Measurement::All) {
        Ok(reading) => {
            if let Reading::Both(env) = reading {
                write!(line, "{env}").ok();
            }
        }
        Err(err) => {
            warn!("DHT11: {}", err);
            line.push_str("DHT11 --").ok();
        }
    }
    board.set_display_text(&line, 0, 0, 1)?;

    line.clear();
    let (pot, light) = (board.read_potentiometer()?, board.read_light_level()?);
    write!(line, "POT {pot:4} LDR {light:4}").ok();
    board.set_display_text(&line, 0, LINE_HEIGHT, 1)?;

    board.show_display()
}
