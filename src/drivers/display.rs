//! OLED Display Driver
//!
//! 128x64 monochrome SSD1306 over I2C. Drawing goes to an in-memory
//! framebuffer; nothing reaches the panel until [`Display::flush`].
//!
//! Every I2C transfer starts with a control byte: [`CONTROL_COMMAND`]
//! followed by one command and its arguments, or [`CONTROL_DATA`] followed
//! by framebuffer bytes.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::hal::i2c::{I2cAddress, I2cBus};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;

/// Framebuffer size in bytes (1 bit per pixel)
pub const BUFFER_SIZE: usize = (DISPLAY_WIDTH * DISPLAY_HEIGHT / 8) as usize;

/// Height of one text line in pixels
pub const LINE_HEIGHT: i32 = 10;

/// Control byte announcing a command
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing display data
pub const CONTROL_DATA: u8 = 0x40;

/// Data bytes per I2C transfer during flush
const FLUSH_CHUNK: usize = 32;

const PAGES: u8 = (DISPLAY_HEIGHT / 8) as u8;
const LAST_COLUMN: u8 = (DISPLAY_WIDTH - 1) as u8;

const SET_CONTRAST: u8 = 0x81;
const NORMAL_DISPLAY: u8 = 0xA6;
const INVERT_DISPLAY: u8 = 0xA7;
const COLUMN_ADDR: u8 = 0x21;
const PAGE_ADDR: u8 = 0x22;

/// Power-on sequence for a 128x64 panel with internal charge pump,
/// one command (plus arguments) per entry
const INIT_SEQUENCE: &[&[u8]] = &[
    &[0xAE],             // display off
    &[0xD5, 0x80],       // clock divide ratio
    &[0xA8, 0x3F],       // multiplex: 64 rows
    &[0xD3, 0x00],       // no vertical offset
    &[0x40],             // start line 0
    &[0x8D, 0x14],       // charge pump on
    &[0x20, 0x00],       // horizontal addressing
    &[0xA1],             // column 127 mapped to SEG0
    &[0xC8],             // scan COM from the bottom
    &[0xDA, 0x12],       // alternative COM pin layout
    &[SET_CONTRAST, 0xCF],
    &[0xD9, 0xF1],       // precharge
    &[0xDB, 0x40],       // VCOMH deselect level
    &[0xA4],             // follow RAM
    &[NORMAL_DISPLAY],
    &[0xAF],             // display on
];

/// Byte index and bit mask of a pixel, `None` off-panel
fn locate(x: u32, y: u32) -> Option<(usize, u8)> {
    (x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT)
        .then(|| ((y / 8 * DISPLAY_WIDTH + x) as usize, 1 << (y % 8)))
}

/// Pixel width and height of `text` in `FONT_6X10`, saturating
fn text_extent(text: &str) -> (i32, i32) {
    let glyph_width = FONT_6X10.character_size.width as i32;
    let mut lines = 0i32;
    let mut widest = 0i32;
    for line in text.split('\n') {
        let chars = i32::try_from(line.chars().count()).unwrap_or(i32::MAX);
        widest = widest.max(chars.saturating_mul(glyph_width));
        lines = lines.saturating_add(1);
    }
    (widest, lines.saturating_mul(LINE_HEIGHT))
}

/// Framebuffer in SSD1306 page layout: each byte is a vertical strip of
/// 8 pixels, LSB on top, pages of 128 bytes from the top of the panel
pub struct DisplayBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl DisplayBuffer {
    /// Blank framebuffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Light or clear one pixel; off-panel coordinates are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if let Some((index, mask)) = locate(x, y) {
            if on {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read back a pixel; off-panel coordinates read as off
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        locate(x, y).is_some_and(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// True when no pixel is lit
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Raw framebuffer, in panel transfer order
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// Only glyph pixels are written, so text drawn with
    /// [`BinaryColor::Off`] erases. Anything outside the panel is clipped.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: BinaryColor) {
        // Reject off-panel text before glyph layout, which adds to x and y
        let (width, height) = text_extent(text);
        if x >= DISPLAY_WIDTH as i32
            || y >= DISPLAY_HEIGHT as i32
            || x.saturating_add(width) <= 0
            || y.saturating_add(height) <= 0
        {
            return;
        }

        let style = MonoTextStyle::new(&FONT_6X10, color);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for DisplayBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Negative coordinates fail the conversion and are clipped
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for DisplayBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

/// SSD1306 panel with its framebuffer
pub struct Display<I> {
    bus: I2cBus<I>,
    buffer: DisplayBuffer,
}

impl<I: I2c> Display<I> {
    /// Wrap the bus; the panel is not touched until [`Display::init`]
    #[must_use]
    pub fn new(i2c: I) -> Self {
        Self {
            bus: I2cBus::new(i2c),
            buffer: DisplayBuffer::new(),
        }
    }

    /// Run the power-on sequence, then push a blank frame
    pub fn init(&mut self) -> Result<(), I::Error> {
        for command in INIT_SEQUENCE {
            self.command(command)?;
        }
        self.buffer.clear();
        self.flush()
    }

    /// Send one command with its arguments
    fn command(&mut self, bytes: &[u8]) -> Result<(), I::Error> {
        let mut frame = [CONTROL_COMMAND; 4];
        let len = bytes.len().min(frame.len() - 1);
        frame[1..=len].copy_from_slice(&bytes[..len]);
        self.bus.write(I2cAddress::SSD1306, &frame[..=len])
    }

    /// Push the whole framebuffer to the panel
    pub fn flush(&mut self) -> Result<(), I::Error> {
        self.command(&[COLUMN_ADDR, 0, LAST_COLUMN])?;
        self.command(&[PAGE_ADDR, 0, PAGES - 1])?;

        let mut frame = [CONTROL_DATA; FLUSH_CHUNK + 1];
        for chunk in self.buffer.as_bytes().chunks(FLUSH_CHUNK) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.bus.write(I2cAddress::SSD1306, &frame[..=chunk.len()])?;
        }
        Ok(())
    }

    /// Stage text into the framebuffer
    pub fn text(&mut self, text: &str, x: i32, y: i32, color: BinaryColor) {
        self.buffer.draw_text(text, x, y, color);
    }

    /// Framebuffer
    #[must_use]
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Framebuffer, for drawing with `embedded-graphics` primitives
    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    /// Blank the framebuffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set panel contrast (0 dimmest, 255 brightest)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I::Error> {
        self.command(&[SET_CONTRAST, contrast])
    }

    /// Swap lit and dark pixels in hardware
    pub fn invert(&mut self, invert: bool) -> Result<(), I::Error> {
        self.command(&[if invert { INVERT_DISPLAY } else { NORMAL_DISPLAY }])
    }

    /// Release the underlying bus
    pub fn release(self) -> I {
        self.bus.release()
    }
}
