use core::sync::atomic::{AtomicBool, Ordering};

/// Operating mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Regular green / yellow / red cycle.
    Normal,
    /// Blinking amber caution pattern.
    Night,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Normal => Mode::Night,
            Mode::Night => Mode::Normal,
        }
    }
}

/// Night-mode flag shared between the button task and the control task.
///
/// The debounce guard is the only writer and the control loop the only
/// reader. A flip is a single atomic operation.
pub struct ModeState {
    night: AtomicBool,
}

impl ModeState {
    /// Starts in [`Mode::Normal`].
    pub const fn new() -> Self {
        Self {
            night: AtomicBool::new(false),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.night.load(Ordering::Acquire) {
            Mode::Night
        } else {
            Mode::Normal
        }
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&self) -> Mode {
        let was_night = self.night.fetch_xor(true, Ordering::AcqRel);
        if was_night { Mode::Normal } else { Mode::Night }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_normal_mode() {
        assert_eq!(ModeState::new().mode(), Mode::Normal);
    }

    #[test]
    fn toggle_alternates() {
        let state = ModeState::new();
        assert_eq!(state.toggle(), Mode::Night);
        assert_eq!(state.mode(), Mode::Night);
        assert_eq!(state.toggle(), Mode::Normal);
        assert_eq!(state.mode(), Mode::Normal);
    }

    #[test]
    fn concurrent_toggles_are_not_lost() {
        let state = ModeState::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1_001 {
                        state.toggle();
                    }
                });
            }
        });
        // 4 * 1001 flips is even
        assert_eq!(state.mode(), Mode::Normal);
    }
}
