use embassy_stm32::timer::simple_pwm::{SimplePwm, SimplePwmChannel};
use embassy_stm32::timer::{Channel, GeneralInstance4Channel};

/// Discrete tri-color LED on channels 1/2/3 (red/green/blue) of one timer.
///
/// Each channel is driven either fully on or fully off, so the PWM carrier
/// frequency does not matter.
///
/// # Generic Parameters
/// - `T`: a 4-channel general purpose timer (TIM2 on the Blue Pill)
pub struct RgbLed<'d, T: GeneralInstance4Channel> {
    /// PWM timer owning the three LED channels
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: GeneralInstance4Channel> RgbLed<'d, T> {
    /// Enables channels 1..3 with the LED off.
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        for ch in [Channel::Ch1, Channel::Ch2, Channel::Ch3] {
            let mut channel = pwm.channel(ch);
            channel.set_duty_cycle_fully_off(); // start dark
            channel.enable(); // output stage on
        }
        Self { pwm }
    }

    /// Sets each color channel fully on or fully off.
    pub fn set(&mut self, red: bool, green: bool, blue: bool) {
        drive(self.pwm.ch1(), red); // CH1 -> red
        drive(self.pwm.ch2(), green); // CH2 -> green
        drive(self.pwm.ch3(), blue); // CH3 -> blue
    }
}

// on = 100 % duty, off = 0 %
fn drive<T: GeneralInstance4Channel>(mut channel: SimplePwmChannel<'_, T>, on: bool) {
    if on {
        channel.set_duty_cycle_fully_on();
    } else {
        channel.set_duty_cycle_fully_off();
    }
}
