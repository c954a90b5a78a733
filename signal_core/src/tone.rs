//! Buzzer frequency validation.

use crate::config::{TONE_MAX_HZ, TONE_MIN_HZ};

/// A frequency the buzzer can actually produce.
///
/// Zero or out-of-range frequencies are rejected instead of being handed to
/// the timer, where they would divide by zero or overflow the reload value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone(u32);

impl Tone {
    pub fn new(frequency_hz: u32) -> Option<Self> {
        (TONE_MIN_HZ..=TONE_MAX_HZ)
            .contains(&frequency_hz)
            .then_some(Self(frequency_hz))
    }

    pub fn hz(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_frequencies_are_valid() {
        for hz in [400, 500, 800, 1_000] {
            assert_eq!(Tone::new(hz).map(Tone::hz), Some(hz));
        }
    }

    #[test]
    fn zero_and_out_of_range_are_rejected() {
        assert_eq!(Tone::new(0), None);
        assert_eq!(Tone::new(TONE_MIN_HZ - 1), None);
        assert_eq!(Tone::new(TONE_MAX_HZ + 1), None);
        assert!(Tone::new(TONE_MIN_HZ).is_some());
        assert!(Tone::new(TONE_MAX_HZ).is_some());
    }
}
