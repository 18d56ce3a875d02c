//! GPIO Abstractions
//!
//! Type-safe GPIO pin wrappers for the AIoT board.
//! Provides semantic meaning to pins through the type system.

use embedded_hal::digital::{InputPin, StatefulOutputPin};

/// Relay driver (active high)
///
/// The state reported by [`Relay::is_on`] is read back from the pin's
/// output latch, not from any electrical feedback on the contacts.
pub struct Relay<P> {
    pin: P,
}

impl<P: StatefulOutputPin> Relay<P> {
    /// Create a relay driver, releasing the coil
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin })
    }

    /// Energize the coil
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    /// Release the coil
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    /// Check if the relay is currently driven on
    pub fn is_on(&mut self) -> Result<bool, P::Error> {
        self.pin.is_set_high()
    }
}

/// Push-button input (active low with pull-up)
///
/// No software debouncing: every call samples the pin once.
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    /// Create a push-button input
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Check if the button is pressed (active low)
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn relay_starts_released() {
        let mut relay = Relay::new(MockPin { high: true }).unwrap();
        assert!(!relay.is_on().unwrap());
        assert!(!relay.pin.high);
    }

    #[test]
    fn relay_on_off() {
        let mut relay = Relay::new(MockPin { high: false }).unwrap();

        relay.on().unwrap();
        assert!(relay.is_on().unwrap());

        assert!(relay.pin.high);

        relay.off().unwrap();
        assert!(!relay.is_on().unwrap());
        assert!(!relay.pin.high);
    }

    #[test]
    fn button_is_active_low() {
        let mut button = Button::new(MockPin { high: true });
        assert!(!button.is_pressed().unwrap());

        button.pin.high = false;
        assert!(button.is_pressed().unwrap());
    }
}
