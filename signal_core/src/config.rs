//! Compile-time configuration.
//!
//! Nothing here can be changed at runtime.

/// Minimum spacing between two accepted button presses, in microseconds.
pub const DEBOUNCE_WINDOW_US: u64 = 300_000;

/// Number of pixels on the LED matrix (5x5).
pub const MATRIX_PIXELS: usize = 25;

/// Lowest buzzer frequency that is actually emitted.
pub const TONE_MIN_HZ: u32 = 200;
/// Highest buzzer frequency that is actually emitted.
pub const TONE_MAX_HZ: u32 = 2_000;

/// Fixed caption drawn in front of the phase label.
pub const STATUS_CAPTION: &str = "Estado";
/// Horizontal pixel offset of the phase label on the status line.
pub const STATUS_LABEL_X: i32 = 50;
