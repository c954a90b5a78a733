//! Constant phase tables.
//!
//! A phase is data: the outputs it shows on entry plus a repeated
//! tone/silence pattern. [`Phase::steps`] flattens it into the ordered
//! `(action, duration)` list that the controller plays with one wait
//! primitive, so the timing contract can be checked without running it.

use crate::color::{Light, Rgb};
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseId {
    Green,
    Yellow,
    Red,
    Night,
}

/// `repetitions` x {tone for `tone_ms`, silence for `silence_ms`}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePattern {
    pub frequency_hz: u32,
    pub tone_ms: u32,
    pub silence_ms: u32,
    pub repetitions: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub id: PhaseId,
    pub label: &'static str,
    pub light: Light,
    pub matrix: Rgb,
    pub pattern: TonePattern,
    /// Turn the light and matrix off during each silence.
    pub blank_during_silence: bool,
}

/// What the controller does at one step of a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Display label, then light, then matrix. Takes no time.
    Show {
        label: &'static str,
        light: Light,
        matrix: Rgb,
    },
    /// Sound the buzzer, then silence it.
    Tone { frequency_hz: u32 },
    /// Keep the current outputs, buzzer silent.
    Silence,
    /// Light and matrix off, buzzer silent.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub action: Action,
    pub duration_ms: u32,
}

impl Phase {
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            phase: self,
            index: 0,
        }
    }

    /// Sum of all step durations.
    pub fn nominal_duration_ms(&self) -> u32 {
        self.steps().map(|step| step.duration_ms).sum()
    }
}

/// Iterator over the steps of a [`Phase`].
pub struct Steps<'a> {
    phase: &'a Phase,
    index: usize,
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let phase = self.phase;
        let pattern = &phase.pattern;
        let len = 1 + 2 * pattern.repetitions as usize;
        if self.index >= len {
            return None;
        }

        let step = match self.index {
            0 => Step {
                action: Action::Show {
                    label: phase.label,
                    light: phase.light,
                    matrix: phase.matrix,
                },
                duration_ms: 0,
            },
            i if i % 2 == 1 => Step {
                action: Action::Tone {
                    frequency_hz: pattern.frequency_hz,
                },
                duration_ms: pattern.tone_ms,
            },
            _ => Step {
                action: if phase.blank_during_silence {
                    Action::Blank
                } else {
                    Action::Silence
                },
                duration_ms: pattern.silence_ms,
            },
        };

        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = 1 + 2 * self.phase.pattern.repetitions as usize;
        let remaining = len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps<'_> {}

pub const GREEN: Phase = Phase {
    id: PhaseId::Green,
    label: "GREEN",
    light: Light::GREEN,
    matrix: Rgb::GREEN,
    pattern: TonePattern {
        frequency_hz: 1_000,
        tone_ms: 200,
        silence_ms: 800,
        repetitions: 4,
    },
    blank_during_silence: false,
};

pub const YELLOW: Phase = Phase {
    id: PhaseId::Yellow,
    label: "YELLOW",
    light: Light::AMBER,
    matrix: Rgb::YELLOW,
    pattern: TonePattern {
        frequency_hz: 500,
        tone_ms: 100,
        silence_ms: 400,
        repetitions: 8,
    },
    blank_during_silence: false,
};

pub const RED: Phase = Phase {
    id: PhaseId::Red,
    label: "RED",
    light: Light::RED,
    matrix: Rgb::RED,
    pattern: TonePattern {
        frequency_hz: 800,
        tone_ms: 500,
        silence_ms: 1_500,
        repetitions: 2,
    },
    blank_during_silence: false,
};

pub const NIGHT: Phase = Phase {
    id: PhaseId::Night,
    label: "NIGHT",
    light: Light::AMBER,
    matrix: Rgb::YELLOW,
    pattern: TonePattern {
        frequency_hz: 400,
        tone_ms: 2_000,
        silence_ms: 2_000,
        repetitions: 1,
    },
    blank_during_silence: true,
};

pub static NORMAL_CYCLE: [Phase; 3] = [GREEN, YELLOW, RED];
pub static NIGHT_CYCLE: [Phase; 1] = [NIGHT];

/// Phases played by one controller iteration in `mode`.
pub fn schedule(mode: Mode) -> &'static [Phase] {
    match mode {
        Mode::Normal => &NORMAL_CYCLE,
        Mode::Night => &NIGHT_CYCLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_cycle_order() {
        let ids: Vec<PhaseId> = schedule(Mode::Normal).iter().map(|p| p.id).collect();
        assert_eq!(ids, [PhaseId::Green, PhaseId::Yellow, PhaseId::Red]);
    }

    #[test]
    fn every_normal_phase_lasts_four_seconds() {
        for phase in schedule(Mode::Normal) {
            assert_eq!(phase.nominal_duration_ms(), 4_000, "{:?}", phase.id);
        }
    }

    #[test]
    fn step_counts_match_repetitions() {
        assert_eq!(GREEN.steps().len(), 1 + 2 * 4);
        assert_eq!(YELLOW.steps().len(), 1 + 2 * 8);
        assert_eq!(RED.steps().len(), 1 + 2 * 2);
        assert_eq!(NIGHT.steps().len(), 3);
    }

    #[test]
    fn night_is_one_tone_then_one_blank() {
        let steps: Vec<Step> = NIGHT.steps().collect();
        assert!(matches!(steps[0].action, Action::Show { label: "NIGHT", .. }));
        assert_eq!(
            steps[1],
            Step {
                action: Action::Tone { frequency_hz: 400 },
                duration_ms: 2_000
            }
        );
        assert_eq!(
            steps[2],
            Step {
                action: Action::Blank,
                duration_ms: 2_000
            }
        );
        assert_eq!(schedule(Mode::Night), &[NIGHT]);
    }

    #[test]
    fn green_steps_alternate_tone_and_silence() {
        let steps: Vec<Step> = GREEN.steps().skip(1).collect();
        for pair in steps.chunks(2) {
            assert_eq!(pair[0].action, Action::Tone { frequency_hz: 1_000 });
            assert_eq!(pair[0].duration_ms, 200);
            assert_eq!(pair[1].action, Action::Silence);
            assert_eq!(pair[1].duration_ms, 800);
        }
    }
}
