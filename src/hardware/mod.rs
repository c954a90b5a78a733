pub mod board;
pub mod button;
pub mod buzzer;
pub mod led_matrix;
pub mod rgb_led;
pub mod status_display;
