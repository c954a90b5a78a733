/// Peripheral bring-up failures. Any of these aborts boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum InitError {
    /// The SSD1306 did not answer its init sequence.
    Display,
    /// The first (all-off) frame could not be written to the LED matrix.
    Matrix,
}
