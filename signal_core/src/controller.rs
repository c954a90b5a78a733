//! The control loop.
//!
//! Each iteration samples the mode once and plays every phase of that mode's
//! schedule to completion. A toggle that lands while a phase is running is
//! only seen at the next iteration.

use embedded_hal_async::delay::DelayNs;

use crate::actuator::Actuators;
use crate::color::Rgb;
use crate::mode::{Mode, ModeState};
use crate::phase::{Action, Phase, Step, schedule};
use crate::tone::Tone;

pub struct Controller<'a, A, D> {
    mode: &'a ModeState,
    outputs: A,
    delay: D,
}

impl<'a, A, D> Controller<'a, A, D>
where
    A: Actuators,
    D: DelayNs,
{
    pub fn new(mode: &'a ModeState, outputs: A, delay: D) -> Self {
        Self {
            mode,
            outputs,
            delay,
        }
    }

    /// Runs forever.
    pub async fn run(&mut self) -> ! {
        loop {
            self.run_once().await;
        }
    }

    /// One iteration: samples the mode and plays its whole schedule.
    ///
    /// Returns the mode that was played.
    pub async fn run_once(&mut self) -> Mode {
        let mode = self.mode.mode();
        #[cfg(feature = "defmt")]
        defmt::debug!("iteration in {} mode", mode);

        for phase in schedule(mode) {
            self.run_phase(phase).await;
        }
        mode
    }

    pub async fn run_phase(&mut self, phase: &Phase) {
        #[cfg(feature = "defmt")]
        defmt::info!("phase {}", phase.id);

        for step in phase.steps() {
            self.run_step(step).await;
        }
    }

    async fn run_step(&mut self, step: Step) {
        match step.action {
            Action::Show {
                label,
                light,
                matrix,
            } => {
                // display first, so it never lags the outputs it describes
                self.outputs.set_display_status(label);
                self.outputs.set_light(light.red, light.green, light.blue);
                self.outputs.set_matrix_color(matrix);
                self.wait(step.duration_ms).await;
            }
            Action::Tone { frequency_hz } => self.play_tone(frequency_hz, step.duration_ms).await,
            Action::Silence => self.wait(step.duration_ms).await,
            Action::Blank => {
                self.outputs.set_light(false, false, false);
                self.outputs.set_matrix_color(Rgb::OFF);
                self.wait(step.duration_ms).await;
            }
        }
    }

    /// Sounds the buzzer for `duration_ms`, then silences it.
    ///
    /// A frequency outside the supported range is not emitted, but the
    /// duration is still honored so the phase timing does not shift.
    pub async fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        match Tone::new(frequency_hz) {
            Some(tone) => self.outputs.start_tone(tone),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("tone of {} Hz out of range, staying silent", frequency_hz);
            }
        }
        self.wait(duration_ms).await;
        self.outputs.stop_tone();
    }

    async fn wait(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms).await;
        }
    }

    pub fn outputs(&self) -> &A {
        &self.outputs
    }
}
