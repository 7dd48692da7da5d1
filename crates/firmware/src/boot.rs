//! Hardware boot sequence for Melody Matrix.
//!
//! Initialization order:
//!   1. `embassy_rp::init` (XOSC 12 MHz → PLL_SYS, `clk_sys` = 125 MHz)
//!   2. Buzzer pin to PWM function, slice 5 configured but disabled (silent)
//!   3. Core 1 launched on its own static stack; it loads the WS2812 PIO
//!      program and runs the matrix task on a second executor
//!   4. Core 0 executor runs the melody task; `main` never returns
//!
//! The PIO program is loaded from core 1 so the PIO0 interrupt fires on the
//! core that awaits it.

use platform::tone::DEFAULT_SYS_CLOCK_HZ;

/// Ordered list of boot sequence steps for documentation and testing.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. Clocks: embassy_rp::init brings clk_sys to 125 MHz",
    "2. Buzzer: GPIO 10 to PWM slice 5 channel A, slice disabled",
    "3. Core 1: spawn on static stack, load WS2812 PIO program, run matrix task",
    "4. Core 0: run melody task on the thread executor",
];

/// GPIO driving the passive buzzer.
pub const BUZZER_GPIO: u8 = 10;

/// PWM slice owning [`BUZZER_GPIO`] (`gpio / 2 % 8`).
pub const BUZZER_PWM_SLICE: u8 = 5;

/// GPIO wired to DIN of the first WS2812.
pub const WS2812_GPIO: u8 = 7;

/// PIO0 state machine running the WS2812 program.
pub const WS2812_STATE_MACHINE: usize = 0;

/// Stack reserved for core 1, in bytes.
pub const CORE1_STACK_BYTES: usize = 16 * 1024;

/// System clock the PWM divider math assumes.
pub const SYS_CLOCK_HZ: u32 = DEFAULT_SYS_CLOCK_HZ;

/// PWM slice a GPIO belongs to on the RP2040.
pub const fn pwm_slice_for_gpio(gpio: u8) -> u8 {
    (gpio >> 1) & 0x7
}

/// Startup banner, logged once per core 0 boot.
pub fn banner() -> (&'static str, &'static str) {
    (platform::config::APP_NAME, platform::config::APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buzzer_slice_matches_gpio() {
        assert_eq!(pwm_slice_for_gpio(BUZZER_GPIO), BUZZER_PWM_SLICE);
    }

    #[test]
    fn ws2812_is_brought_up_on_core1() {
        assert!(BOOT_SEQUENCE_STEPS
            .iter()
            .any(|s| s.contains("WS2812") && s.contains("Core 1")));
    }

    #[test]
    fn four_boot_steps() {
        assert_eq!(BOOT_SEQUENCE_STEPS.len(), 4);
    }
}
