use embassy_stm32::timer::GeneralInstance4Channel;
use embedded_hal::{i2c::I2c, spi::SpiBus};
use signal_core::{Actuators, Rgb, tone::Tone};

use super::{buzzer::Buzzer, led_matrix::LedMatrix, rgb_led::RgbLed, status_display::StatusDisplay};

/// All four outputs of the signal head, owned by the control task.
///
/// Every facade call forwards to one driver. Drivers log their own bus
/// errors, so nothing here can fail.
pub struct Board<'d, L, B, SPI, I2C>
where
    L: GeneralInstance4Channel,
    B: GeneralInstance4Channel,
{
    /// Discrete red/green/blue light
    pub light: RgbLed<'d, L>,
    /// PWM buzzer
    pub buzzer: Buzzer<'d, B>,
    /// 25-pixel WS2812 matrix
    pub matrix: LedMatrix<SPI>,
    /// OLED status line
    pub display: StatusDisplay<I2C>,
}

impl<L, B, SPI, I2C> Actuators for Board<'_, L, B, SPI, I2C>
where
    L: GeneralInstance4Channel,
    B: GeneralInstance4Channel,
    SPI: SpiBus,
    I2C: I2c,
{
    fn set_light(&mut self, red: bool, green: bool, blue: bool) {
        self.light.set(red, green, blue);
    }

    fn set_matrix_color(&mut self, color: Rgb) {
        self.matrix.fill(color);
    }

    fn start_tone(&mut self, tone: Tone) {
        self.buzzer.start(tone);
    }

    fn stop_tone(&mut self) {
        self.buzzer.silence();
    }

    fn set_display_status(&mut self, label: &str) {
        self.display.show(label);
    }
}
