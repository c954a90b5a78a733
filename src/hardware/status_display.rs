use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use signal_core::config::{STATUS_CAPTION, STATUS_LABEL_X};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use crate::error::InitError;

/// Buffered SSD1306 driver type over an I2C bus
type Oled<I2C> = Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 128x64 showing a single status line: the fixed caption on the
/// left and the current phase label at a fixed offset.
///
/// Layout (6x10 font, top baseline):
/// ```text
/// Estado    GREEN
/// ^x=0      ^x=50
/// ```
pub struct StatusDisplay<I2C> {
    /// Panel driver in buffered graphics mode
    display: Oled<I2C>,
    /// Text style shared by both fields
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<I2C: I2c> StatusDisplay<I2C> {
    /// Runs the panel init sequence and leaves the screen blank.
    ///
    /// # Returns
    /// - `Ok(Self)`: panel initialized and cleared
    /// - `Err(InitError::Display)`: the panel did not answer
    pub fn new(i2c: I2C) -> Result<Self, InitError> {
        // Create display interface and driver
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        // Panel init sequence
        display.init().map_err(|e| {
            defmt::error!("display init failed: {}", defmt::Debug2Format(&e));
            InitError::Display
        })?;
        // Start from a blank screen
        display.clear_buffer();
        display.flush().map_err(|e| {
            defmt::error!("display first flush failed: {}", defmt::Debug2Format(&e));
            InitError::Display
        })?;

        // White 6x10 text
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();

        Ok(Self { display, style })
    }

    /// Clears the screen and redraws the status line with `label`.
    pub fn show(&mut self, label: &str) {
        // Clear the frame buffer
        self.display.clear_buffer();

        // Caption at the left edge, label at the fixed offset
        let caption = Text::with_baseline(STATUS_CAPTION, Point::zero(), self.style, Baseline::Top);
        let value = Text::with_baseline(label, Point::new(STATUS_LABEL_X, 0), self.style, Baseline::Top);

        // Draw both fields, then push the buffer to the panel
        let result = caption
            .draw(&mut self.display)
            .and_then(|_| value.draw(&mut self.display))
            .and_then(|_| self.display.flush());

        if let Err(e) = result {
            defmt::warn!("display update failed: {}", defmt::Debug2Format(&e));
        }
    }
}
