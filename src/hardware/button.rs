use embassy_stm32::exti::ExtiInput;

/// The night-mode push button.
///
/// Wiring: button between the pin and GND, internal pull-up enabled, so
/// the line idles high and a press is a falling edge.
pub struct NightButton<'d> {
    /// EXTI-capable input pin
    pin: ExtiInput<'d>,
}

impl<'d> NightButton<'d> {
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }

    /// Waits for the next falling edge.
    ///
    /// Contact bounce is not filtered here; every edge is reported and the
    /// debounce guard decides.
    pub async fn wait_for_edge(&mut self) {
        self.pin.wait_for_falling_edge().await;
    }
}
