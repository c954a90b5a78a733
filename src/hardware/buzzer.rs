use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;
use embassy_stm32::timer::{Channel, GeneralInstance4Channel};
use signal_core::tone::Tone;

/// Passive buzzer on one timer channel, driven with a 50 % square wave.
///
/// The tone duration is not handled here: the caller starts a tone, waits,
/// and calls [`Buzzer::silence`].
pub struct Buzzer<'d, T: GeneralInstance4Channel> {
    /// PWM timer; its frequency is retuned for every tone
    pwm: SimplePwm<'d, T>,
    /// Channel the buzzer is wired to
    channel: Channel,
}

impl<'d, T: GeneralInstance4Channel> Buzzer<'d, T> {
    /// Enables the buzzer channel, silent.
    pub fn new(mut pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        let mut ch = pwm.channel(channel);
        ch.set_duty_cycle_fully_off(); // no sound until the first tone
        ch.enable();
        Self { pwm, channel }
    }

    /// Starts sounding `tone` until [`Buzzer::silence`] is called.
    pub fn start(&mut self, tone: Tone) {
        // The timer picks prescaler and reload itself; Tone guarantees a
        // non-zero frequency in range
        self.pwm.set_frequency(Hertz(tone.hz()));

        // Duty is relative to the new reload value: set it after the frequency
        self.pwm.channel(self.channel).set_duty_cycle_fraction(1, 2);
    }

    /// Stops the square wave; the pin stays low.
    pub fn silence(&mut self) {
        self.pwm.channel(self.channel).set_duty_cycle_fully_off();
    }
}
