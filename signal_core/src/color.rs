//! Output color types and the LED matrix color word.

/// Color of the LED matrix, each channel a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Packs the color into the 32-bit word streamed to each matrix pixel.
    ///
    /// Layout: green in bits 31..24, red in 23..16, blue in 15..8, low byte
    /// unused.
    pub fn packed_grb(&self) -> u32 {
        let g = channel_byte(self.green) as u32;
        let r = channel_byte(self.red) as u32;
        let b = channel_byte(self.blue) as u32;
        (g << 24) | (r << 16) | (b << 8)
    }
}

/// Splits a packed color word back into `[red, green, blue]` bytes.
pub fn grb_channels(word: u32) -> [u8; 3] {
    [(word >> 16) as u8, (word >> 24) as u8, (word >> 8) as u8]
}

// Truncates like an integer cast; NaN maps to 0.
fn channel_byte(fraction: f32) -> u8 {
    (fraction.clamp(0.0, 1.0) * 255.0) as u8
}

/// On/off state of the three discrete light channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Light {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Light {
    pub const OFF: Light = Light::new(false, false, false);
    pub const RED: Light = Light::new(true, false, false);
    pub const GREEN: Light = Light::new(false, true, false);
    /// Red and green together.
    pub const AMBER: Light = Light::new(true, true, false);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}
