use core::iter;

use embedded_hal::spi::{Error as _, SpiBus};
use signal_core::color::grb_channels;
use signal_core::config::MATRIX_PIXELS;
use signal_core::Rgb;
use smart_leds::{RGB8, SmartLedsWrite};
use ws2812_spi::Ws2812;

use crate::error::InitError;

/// 5x5 WS2812 matrix fed from the MOSI line of an SPI bus.
///
/// The whole matrix always shows one color. The color goes through the
/// packed GRB word first so the pixels see exactly the documented packing.
///
/// # Notes
/// - The SPI clock must sit between 2 and 3.8 MHz for `ws2812-spi`
/// - SCK is driven but not wired; only MOSI reaches the matrix
pub struct LedMatrix<SPI> {
    /// WS2812 driver wrapping the SPI bus
    leds: Ws2812<SPI>,
}

impl<SPI: SpiBus> LedMatrix<SPI> {
    /// Takes the bus and blanks the matrix.
    ///
    /// # Returns
    /// - `Ok(Self)`: the all-off frame was written
    /// - `Err(InitError::Matrix)`: the bus rejected the first frame
    pub fn new(spi: SPI) -> Result<Self, InitError> {
        let mut matrix = Self {
            leds: Ws2812::new(spi),
        };

        // Blank the matrix; a failure here aborts boot
        matrix.write(Rgb::OFF).map_err(|e| {
            defmt::error!("LED matrix init failed: {}", defmt::Debug2Format(&e.kind()));
            InitError::Matrix
        })?;

        Ok(matrix)
    }

    /// Fills every pixel with `color`. Bus errors are logged and dropped.
    pub fn fill(&mut self, color: Rgb) {
        if let Err(e) = self.write(color) {
            defmt::warn!("LED matrix write failed: {}", defmt::Debug2Format(&e.kind()));
        }
    }

    fn write(&mut self, color: Rgb) -> Result<(), SPI::Error> {
        // Packed word -> per-channel bytes
        let [r, g, b] = grb_channels(color.packed_grb());
        let pixel = RGB8::new(r, g, b);

        // Same pixel streamed to every LED of the chain
        self.leds.write(iter::repeat(pixel).take(MATRIX_PIXELS))
    }
}
