//! Board Peripheral Facade
//!
//! [`Board`] owns every peripheral on the AIoT board and exposes one
//! method per peripheral action. Each handle is set up exactly once, in
//! [`Board::new`], and lives as long as the board value.
//!
//! The facade is generic over [`BoardHal`], a bundle of associated types
//! naming the concrete pin, bus and driver types of the target. The ESP32
//! binary supplies `esp-hal` types; the host tests supply mocks.
//!
//! All operations are synchronous and take `&mut self`. There is no
//! internal locking; share a board between contexts by wrapping it in a
//! mutex outside this crate.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, StatefulOutputPin};
use embedded_hal::i2c::I2c;
use embedded_hal::pwm::SetDutyCycle;
use smart_leds::{SmartLedsWrite, RGB8};

use crate::config::{
    NUM_BUTTONS, NUM_RELAYS, NUM_RGB_LEDS, SELF_TEST_PAUSE_MS, SELF_TEST_TEXT,
};
use crate::drivers::display::Display;
use crate::drivers::rgb::RgbChain;
use crate::drivers::EnvironmentSensor;
use crate::error::{BoardError, BoardResult, Peripheral};
use crate::hal::adc::{AnalogChannel, AnalogInput};
use crate::hal::gpio::{Button, Relay};
use crate::hal::pwm::{Buzzer, BuzzerConfig};
use crate::types::{
    colors, BankSelector, ButtonSelector, EnvReading, Measurement, PixelColor, Reading,
    RelaySelector, Rgb, RgbSelector,
};

/// Concrete peripheral types of a target
pub trait BoardHal {
    /// Relay output pin (must read back its driven level)
    type RelayPin: StatefulOutputPin;
    /// Push-button input pin
    type ButtonPin: InputPin;
    /// Buzzer PWM channel
    type BuzzerPwm: SetDutyCycle;
    /// Addressable LED chain writer
    type LedWriter: SmartLedsWrite<Color = RGB8>;
    /// Temperature/humidity sensor
    type EnvSensor: EnvironmentSensor;
    /// Potentiometer ADC channel
    type Potentiometer: AnalogChannel;
    /// Light sensor ADC channel
    type LightSensor: AnalogChannel;
    /// OLED display bus
    type DisplayBus: I2c;
}

/// Raw peripherals handed to [`Board::new`], in board order
pub struct BoardParts<H: BoardHal> {
    /// I2C bus wired to the OLED (SCL GPIO22, SDA GPIO21)
    pub display_bus: H::DisplayBus,
    /// Relay 1 and relay 2 outputs
    pub relays: [H::RelayPin; NUM_RELAYS],
    /// Buzzer PWM channel
    pub buzzer: H::BuzzerPwm,
    /// Buzzer tone settings applied at construction
    pub buzzer_config: BuzzerConfig,
    /// RGB chain writer
    pub leds: H::LedWriter,
    /// DHT11 driver
    pub env_sensor: H::EnvSensor,
    /// Buttons 1 to 4, configured as pull-up inputs
    pub buttons: [H::ButtonPin; NUM_BUTTONS],
    /// Potentiometer channel
    pub potentiometer: H::Potentiometer,
    /// Light sensor channel
    pub light_sensor: H::LightSensor,
}

/// The AIoT board
pub struct Board<H: BoardHal> {
    display: Display<H::DisplayBus>,
    relays: [Relay<H::RelayPin>; NUM_RELAYS],
    buzzer: Buzzer<H::BuzzerPwm>,
    rgb: RgbChain<H::LedWriter>,
    env_sensor: H::EnvSensor,
    last_reading: Option<EnvReading>,
    buttons: [Button<H::ButtonPin>; NUM_BUTTONS],
    potentiometer: AnalogInput<H::Potentiometer>,
    light_sensor: AnalogInput<H::LightSensor>,
}

fn init_failed(peripheral: Peripheral) -> BoardError {
    #[cfg(feature = "defmt")]
    defmt::error!("{} initialization failed", peripheral);
    BoardError::PeripheralInit(peripheral)
}

impl<H: BoardHal> Board<H> {
    /// Bring up every peripheral
    ///
    /// The display is initialized and cleared, both relays are released
    /// and the buzzer duty cycle is applied. The RGB buffer starts dark but
    /// is not written to the chain until the first flush.
    ///
    /// # Errors
    ///
    /// [`BoardError::PeripheralInit`] naming the first peripheral that
    /// failed to come up.
    pub fn new(parts: BoardParts<H>) -> BoardResult<Self> {
        let mut display = Display::new(parts.display_bus);
        display.init().map_err(|_| init_failed(Peripheral::Display))?;

        let [relay1, relay2] = parts.relays;
        let relays = [
            Relay::new(relay1).map_err(|_| init_failed(Peripheral::Relay))?,
            Relay::new(relay2).map_err(|_| init_failed(Peripheral::Relay))?,
        ];

        let buzzer = Buzzer::new(parts.buzzer, parts.buzzer_config)
            .map_err(|_| init_failed(Peripheral::Buzzer))?;

        let board = Self {
            display,
            relays,
            buzzer,
            rgb: RgbChain::new(parts.leds),
            env_sensor: parts.env_sensor,
            last_reading: None,
            buttons: parts.buttons.map(Button::new),
            potentiometer: AnalogInput::new(parts.potentiometer),
            light_sensor: AnalogInput::new(parts.light_sensor),
        };

        #[cfg(feature = "defmt")]
        {
            defmt::info!("Welcome to {=str}", crate::config::BOARD_NAME);
            defmt::info!("For more detail, please visit {=str}", crate::config::BOARD_URL);
        }

        Ok(board)
    }

    // -------------------------------------------------------------------
    // RGB LEDs
    // -------------------------------------------------------------------

    /// Stage `color` for the selected LEDs; call [`Board::show_rgb`] to
    /// make it visible
    pub fn set_rgb_color(&mut self, selector: RgbSelector, color: Rgb) {
        for slot in selector.slots() {
            self.rgb.set(slot, color);
        }
    }

    /// Push the staged colors to the LED chain
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the LED chain write fails.
    pub fn show_rgb(&mut self) -> BoardResult<()> {
        self.rgb
            .show()
            .map_err(|_| BoardError::Bus(Peripheral::RgbLed))
    }

    /// Switch the selected LEDs off and flush immediately
    ///
    /// Unlike [`Board::set_rgb_color`] this does not wait for
    /// [`Board::show_rgb`]; any other staged colors go out with it.
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the LED chain write fails.
    pub fn turn_off_rgb(&mut self, selector: RgbSelector) -> BoardResult<()> {
        self.set_rgb_color(selector, colors::OFF);
        self.show_rgb()
    }

    /// Staged colors, LED 0 first
    #[must_use]
    pub fn rgb_colors(&self) -> [Rgb; NUM_RGB_LEDS] {
        *self.rgb.pixels()
    }

    // -------------------------------------------------------------------
    // Relays
    // -------------------------------------------------------------------

    /// Energize the selected relays
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if a relay pin cannot be driven.
    pub fn relay_on(&mut self, selector: RelaySelector) -> BoardResult<()> {
        for slot in selector.slots() {
            self.relays[slot]
                .on()
                .map_err(|_| BoardError::Pin(Peripheral::Relay))?;
        }
        Ok(())
    }

    /// Release the selected relays
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if a relay pin cannot be driven.
    pub fn relay_off(&mut self, selector: RelaySelector) -> BoardResult<()> {
        for slot in selector.slots() {
            self.relays[slot]
                .off()
                .map_err(|_| BoardError::Pin(Peripheral::Relay))?;
        }
        Ok(())
    }

    /// Check the driven level of the selected relay, or of any relay for
    /// [`RelaySelector::All`]
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if a relay pin cannot be read back.
    pub fn is_relay_on(&mut self, selector: RelaySelector) -> BoardResult<bool> {
        for slot in selector.slots() {
            let on = self.relays[slot]
                .is_on()
                .map_err(|_| BoardError::Pin(Peripheral::Relay))?;
            if on {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // -------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------

    /// Sample the selected button, or check whether any button is held
    /// for [`ButtonSelector::All`]
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if a button pin cannot be read.
    pub fn is_button_pressed(&mut self, selector: ButtonSelector) -> BoardResult<bool> {
        for slot in selector.slots() {
            let pressed = self.buttons[slot]
                .is_pressed()
                .map_err(|_| BoardError::Pin(Peripheral::Button))?;
            if pressed {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // -------------------------------------------------------------------
    // Environment sensor
    // -------------------------------------------------------------------

    /// Take one DHT11 sample and return the quantity asked for
    ///
    /// Blocks for the whole transaction (about 25 ms). Every call samples
    /// the sensor again; the DHT11 needs about a second between samples.
    ///
    /// # Errors
    ///
    /// [`BoardError::SensorRead`] carrying the sensor failure.
    pub fn measure_environment(&mut self, kind: Measurement) -> BoardResult<Reading> {
        let sample = self.env_sensor.measure().map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("environment sample failed: {}", err);
            BoardError::SensorRead(err)
        })?;
        self.last_reading = Some(sample);
        Ok(sample.select(kind))
    }

    /// Most recent successful sample
    #[must_use]
    pub const fn last_reading(&self) -> Option<EnvReading> {
        self.last_reading
    }

    // -------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------

    /// Stage `text` at pixel (`x`, `y`) in the framebuffer
    ///
    /// `color_bit` is 1 to light pixels or 0 to clear them. Nothing is
    /// visible until [`Board::show_display`].
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidArgument`] if `color_bit` is not 0 or 1.
    pub fn set_display_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color_bit: u8,
    ) -> BoardResult<()> {
        let color = PixelColor::try_from(color_bit)?;
        self.display.text(text, x, y, color.into());
        Ok(())
    }

    /// Push the framebuffer to the panel
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the I2C transfer fails.
    pub fn show_display(&mut self) -> BoardResult<()> {
        self.display
            .flush()
            .map_err(|_| BoardError::Bus(Peripheral::Display))
    }

    /// Blank the framebuffer
    pub fn clear_display(&mut self) {
        self.display.clear();
    }

    /// Set the panel contrast
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the I2C transfer fails.
    pub fn set_display_contrast(&mut self, contrast: u8) -> BoardResult<()> {
        self.display
            .set_contrast(contrast)
            .map_err(|_| BoardError::Bus(Peripheral::Display))
    }

    /// Invert the panel colors
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the I2C transfer fails.
    pub fn invert_display(&mut self, invert: bool) -> BoardResult<()> {
        self.display
            .invert(invert)
            .map_err(|_| BoardError::Bus(Peripheral::Display))
    }

    // -------------------------------------------------------------------
    // Buzzer
    // -------------------------------------------------------------------

    /// Current buzzer settings
    #[must_use]
    pub fn buzzer_config(&self) -> BuzzerConfig {
        self.buzzer.config()
    }

    /// Set the buzzer duty cycle (0-100 %)
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidArgument`] above 100 %, [`BoardError::Bus`] if
    /// the PWM channel rejects the duty cycle.
    pub fn set_buzzer_duty(&mut self, percent: u8) -> BoardResult<()> {
        if percent > 100 {
            return Err(BoardError::InvalidArgument("buzzer duty above 100%"));
        }
        self.buzzer
            .set_duty(percent)
            .map_err(|_| BoardError::Bus(Peripheral::Buzzer))
    }

    /// Silence the buzzer
    ///
    /// # Errors
    ///
    /// [`BoardError::Bus`] if the PWM channel rejects the duty cycle.
    pub fn buzzer_off(&mut self) -> BoardResult<()> {
        self.buzzer
            .off()
            .map_err(|_| BoardError::Bus(Peripheral::Buzzer))
    }

    // -------------------------------------------------------------------
    // Analog inputs
    // -------------------------------------------------------------------

    /// Raw 12-bit potentiometer position
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if the conversion fails.
    pub fn read_potentiometer(&mut self) -> BoardResult<u16> {
        self.potentiometer
            .read()
            .map_err(|_| BoardError::Pin(Peripheral::Potentiometer))
    }

    /// Raw 12-bit light sensor level
    ///
    /// # Errors
    ///
    /// [`BoardError::Pin`] if the conversion fails.
    pub fn read_light_level(&mut self) -> BoardResult<u16> {
        self.light_sensor
            .read()
            .map_err(|_| BoardError::Pin(Peripheral::LightSensor))
    }

    // -------------------------------------------------------------------
    // Demo
    // -------------------------------------------------------------------

    /// Power-on demonstration: LEDs red for a second, then off, then the
    /// placeholder text on the display
    ///
    /// # Errors
    ///
    /// The first LED or display failure, as in [`Board::show_rgb`] and
    /// [`Board::show_display`].
    pub fn self_test<D: DelayNs>(&mut self, delay: &mut D) -> BoardResult<()> {
        #[cfg(feature = "defmt")]
        defmt::info!("self-test");

        self.set_rgb_color(RgbSelector::All, colors::RED);
        self.show_rgb()?;
        delay.delay_ms(SELF_TEST_PAUSE_MS);
        self.turn_off_rgb(RgbSelector::All)?;
        self.set_display_text(SELF_TEST_TEXT, 0, 0, 1)?;
        self.show_display()
    }
}
