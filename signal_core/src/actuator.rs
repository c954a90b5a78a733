use crate::color::Rgb;
use crate::tone::Tone;

/// The outputs driven by the control loop.
///
/// Every call completes immediately and cannot fail from the caller's point
/// of view; an implementation that hits a bus error logs it and moves on.
/// Timed behavior (how long a tone lasts) belongs to the caller.
pub trait Actuators {
    /// Discrete tri-color light, each channel fully on or off.
    fn set_light(&mut self, red: bool, green: bool, blue: bool);

    /// Fills every matrix pixel with `color`.
    fn set_matrix_color(&mut self, color: Rgb);

    fn start_tone(&mut self, tone: Tone);
    fn stop_tone(&mut self);

    /// Clears the status line and draws `label` on it.
    fn set_display_status(&mut self, label: &str);
}
