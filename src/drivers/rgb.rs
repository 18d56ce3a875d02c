//! Buffered RGB LED chain
//!
//! Colors are staged in a per-LED buffer and only pushed to the chain by
//! [`RgbChain::show`]. Generic over any `smart-leds` writer.

use smart_leds::{SmartLedsWrite, RGB8};

use crate::config::NUM_RGB_LEDS;
use crate::types::colors;

/// Buffered chain of addressable RGB LEDs
pub struct RgbChain<W> {
    writer: W,
    pixels: [RGB8; NUM_RGB_LEDS],
}

impl<W> RgbChain<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Create a chain with every entry off; nothing is written yet
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [colors::OFF; NUM_RGB_LEDS],
        }
    }

    /// Stage a color for one LED; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// All buffered colors
    #[must_use]
    pub const fn pixels(&self) -> &[RGB8; NUM_RGB_LEDS] {
        &self.pixels
    }

    /// Push the buffer to the chain
    pub fn show(&mut self) -> Result<(), W::Error> {
        self.writer.write(self.pixels.iter().copied())
    }
}
