//! PWM Abstractions
//!
//! Buzzer driver over an `embedded-hal` PWM channel. The tone frequency
//! is fixed by the timer the chip HAL attaches to the channel; the driver
//! only controls the duty cycle.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::{BUZZER_DUTY_PERCENT, BUZZER_FREQUENCY_HZ};

/// Buzzer tone settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuzzerConfig {
    /// Tone frequency in Hz
    pub frequency_hz: u32,
    /// Duty cycle in percent (0 = silent)
    pub duty_percent: u8,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            frequency_hz: BUZZER_FREQUENCY_HZ,
            duty_percent: BUZZER_DUTY_PERCENT,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BuzzerConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz @ {}%", self.frequency_hz, self.duty_percent);
    }
}

/// Piezo buzzer on a PWM channel
pub struct Buzzer<C> {
    channel: C,
    config: BuzzerConfig,
}

impl<C: SetDutyCycle> Buzzer<C> {
    /// Create a buzzer and apply the configured duty cycle
    pub fn new(mut channel: C, config: BuzzerConfig) -> Result<Self, C::Error> {
        channel.set_duty_cycle_percent(config.duty_percent.min(100))?;
        Ok(Self { channel, config })
    }

    /// Current settings
    #[must_use]
    pub const fn config(&self) -> BuzzerConfig {
        self.config
    }

    /// Set the duty cycle (clamped to 100 %)
    pub fn set_duty(&mut self, percent: u8) -> Result<(), C::Error> {
        let percent = percent.min(100);
        self.channel.set_duty_cycle_percent(percent)?;
        self.config.duty_percent = percent;
        Ok(())
    }

    /// Silence the buzzer
    pub fn off(&mut self) -> Result<(), C::Error> {
        self.set_duty(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct MockPwm {
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn default_config_is_silent() {
        let buzzer = Buzzer::new(MockPwm { duty: 77 }, BuzzerConfig::default()).unwrap();
        assert_eq!(buzzer.config().frequency_hz, 500);
        assert_eq!(buzzer.channel.duty, 0);
        assert_eq!(buzzer.config().duty_percent, 0);
    }

    #[test]
    fn set_duty_scales_to_channel() {
        let mut buzzer = Buzzer::new(MockPwm { duty: 0 }, BuzzerConfig::default()).unwrap();
        buzzer.set_duty(50).unwrap();
        assert_eq!(buzzer.channel.duty, 500);
        assert_eq!(buzzer.config().duty_percent, 50);

        buzzer.set_duty(200).unwrap();
        assert_eq!(buzzer.config().duty_percent, 100);
        assert_eq!(buzzer.channel.duty, 1000);

        buzzer.off().unwrap();
        assert_eq!(buzzer.channel.duty, 0);
    }
}
