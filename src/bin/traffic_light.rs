//! STM32F103 Traffic Signal with Night Mode
//! =============================================================================================
//!
//! Date			Author          Notes
//! 2026-10-17	    TS              Initial release
//!
//!==============================================================================================
//!
//! This firmware implements a road traffic signal using:
//! - Discrete RGB LED on TIM2 PWM channels
//! - Passive buzzer on TIM3 PWM
//! - 5x5 WS2812 LED matrix via SPI2
//! - SSD1306 OLED display (128x64) via I2C1
//! - Push button on EXTI1 for night mode
//!
//! Hardware Connections:
//!   RGB LED -> Blue Pill
//!      R    -> PA0 (TIM2_CH1)
//!      G    -> PA1 (TIM2_CH2)
//!      B    -> PA2 (TIM2_CH3)
//!
//!   Buzzer  -> PB0 (TIM3_CH3)
//!
//!   LED Matrix -> Blue Pill
//!      DIN  -> PB15 (SPI2 MOSI)
//!      (PB13 SPI2 SCK is driven but not wired)
//!
//!   OLED Display -> Blue Pill
//!      SDA  -> PB7 (I2C1)
//!      SCL  -> PB6 (I2C1)
//!
//!   Night Button -> PB1 to GND (internal pull-up)
//!
//! Features:
//! 1. GREEN / YELLOW / RED cycle, 4 s per phase, one beep pattern per phase
//! 2. Night mode: amber with a 400 Hz tone for 2 s, then dark for 2 s
//! 3. Debounced button (300 ms) toggling night mode
//! 4. Mode changes take effect at the end of the running cycle
//! 5. Current phase shown on the OLED status line

#![no_std] // bare-metal target
#![no_main] // entry point comes from cortex-m-rt

use defmt::*; // logging macros
use embassy_executor::Spawner; // async task spawner
use embassy_stm32::{
    exti::ExtiInput, // external interrupt input
    gpio::{OutputType, Pull},
    i2c, mode,
    peripherals::{TIM2, TIM3},
    spi,
    time::{Hertz, khz},
    timer::{
        Channel,
        low_level::CountingMode,
        simple_pwm::{PwmPin, SimplePwm},
    },
};
use embassy_time::{Delay, Instant};
use signal_core::{Controller, DebounceGuard, ModeState};
use traffic_signal::hardware::{
    board::Board, button::NightButton, buzzer::Buzzer, led_matrix::LedMatrix, rgb_led::RgbLed,
    status_display::StatusDisplay,
};
use {defmt_rtt as _, panic_probe as _}; // RTT logger and panic handler

/// Night-mode flag: written by the button task, read by the control task.
static MODE: ModeState = ModeState::new();

/// Concrete outputs owned by the control task
type SignalBoard = Board<
    'static,
    TIM2,
    TIM3,
    spi::Spi<'static, mode::Blocking>,
    i2c::I2c<'static, mode::Blocking>,
>;

/// Main application entry point
///
/// Responsibilities:
/// 1. Configure the system clock (HSE 8 MHz, PLL to 72 MHz)
/// 2. Bring up every output; any failure halts here
/// 3. Spawn the button task and the control task
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Clock: external 8 MHz crystal through the PLL to 72 MHz
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,     // PLL fed from HSE
            prediv: PllPreDiv::DIV1, // no pre-division
            mul: PllMul::MUL9,       // 8 MHz * 9 = 72 MHz
        });
        config.rcc.sys = Sysclk::PLL1_P; // system clock from PLL
        config.rcc.ahb_pre = AHBPrescaler::DIV1; // AHB 72 MHz
        config.rcc.apb1_pre = APBPrescaler::DIV2; // APB1 36 MHz
        config.rcc.apb2_pre = APBPrescaler::DIV1; // APB2 72 MHz
    }

    // Initialize peripherals
    let p = embassy_stm32::init(config);
    info!("traffic signal booting");

    // RGB LED: TIM2 channels 1..3, 1 kHz carrier
    let light_pwm = SimplePwm::new(
        p.TIM2,
        Some(PwmPin::new_ch1(p.PA0, OutputType::PushPull)),
        Some(PwmPin::new_ch2(p.PA1, OutputType::PushPull)),
        Some(PwmPin::new_ch3(p.PA2, OutputType::PushPull)),
        None,
        khz(1),
        CountingMode::EdgeAlignedUp,
    );

    // Buzzer: TIM3 channel 3, frequency re-tuned per tone
    let buzzer_pwm = SimplePwm::new(
        p.TIM3,
        None,
        None,
        Some(PwmPin::new_ch3(p.PB0, OutputType::PushPull)),
        None,
        khz(1),
        CountingMode::EdgeAlignedUp,
    );

    // LED matrix: SPI2 transmit-only
    // APB1 is 36 MHz, so the prescaler lands on 2.25 MHz
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(2_400_000);
    let matrix_spi = spi::Spi::new_blocking_txonly(p.SPI2, p.PB13, p.PB15, spi_config);

    // OLED: blocking I2C1 at 400 kHz
    let oled_i2c = i2c::I2c::new_blocking(p.I2C1, p.PB6, p.PB7, Hertz::khz(400), Default::default());

    // Any failure here halts before the control loop starts
    let board: SignalBoard = Board {
        light: RgbLed::new(light_pwm),
        buzzer: Buzzer::new(buzzer_pwm, Channel::Ch3),
        matrix: unwrap!(LedMatrix::new(matrix_spi)),
        display: unwrap!(StatusDisplay::new(oled_i2c)),
    };
    info!("peripherals ready");

    // Night button: PB1 with pull-up, pressed = falling edge
    let button = NightButton::new(ExtiInput::new(p.PB1, p.EXTI1, Pull::Up));

    // Start the two tasks sharing the mode flag
    unwrap!(spawner.spawn(button_task(button, &MODE)));
    unwrap!(spawner.spawn(control_task(board, &MODE)));
}

/// Night Button Task
///
/// Responsibilities:
/// 1. Wait for the falling edge from EXTI
/// 2. Timestamp it and run the debounce guard
/// 3. Log every accepted press
///
/// # Arguments
/// - `button`: the EXTI-backed night button
/// - `mode`: shared flag; this task is its only writer
#[embassy_executor::task]
async fn button_task(mut button: NightButton<'static>, mode: &'static ModeState) -> ! {
    let mut guard = DebounceGuard::new(mode);
    loop {
        // Wake on the next edge
        button.wait_for_edge().await;

        // Bounces inside the window are dropped silently
        if let Some(new_mode) = guard.on_edge(Instant::now().as_micros()) {
            info!("night button: switching to {} mode", new_mode);
        }
    }
}

/// Signal Control Task
///
/// Plays the phase schedule forever. The mode is sampled once per cycle,
/// so a press is honored only after the running cycle completes.
///
/// # Arguments
/// - `board`: all four outputs
/// - `mode`: shared flag; this task only reads it
#[embassy_executor::task]
async fn control_task(board: SignalBoard, mode: &'static ModeState) -> ! {
    let mut controller = Controller::new(mode, board, Delay);
    controller.run().await
}

/* Implementation Notes:
 *
 * 1. Timing:
 *    - embassy-time ticks at 1 MHz, so edge timestamps are in microseconds
 *    - All waits go through `embassy_time::Delay`, the controller's only wait
 *
 * 2. Shared state:
 *    - `MODE` is a single atomic flag; there is no lock
 *    - The debounce timestamp lives in the button task alone
 *
 * 3. Outputs:
 *    - Runtime bus errors (I2C, SPI) are logged and skipped
 *    - Init errors stop the firmware through `unwrap!` and panic-probe
 */
