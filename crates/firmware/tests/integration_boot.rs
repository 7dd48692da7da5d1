//! Boot configuration integration tests
// Integration test file: expect/unwrap/indexing are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::assertions_on_constants,
)]
//!
//! Validates the pin map, boot order and timing constants from the firmware
//! crate's perspective, without needing physical hardware.
//!
//! Run with: cargo test -p firmware --test integration_boot

use firmware::boot::{
    pwm_slice_for_gpio, BOOT_SEQUENCE_STEPS, BUZZER_GPIO, BUZZER_PWM_SLICE, CORE1_STACK_BYTES,
    SYS_CLOCK_HZ, WS2812_GPIO,
};
use firmware::exception_handlers::HARDFAULT_DEFINED;
use platform::note::Note;
use platform::tone::PwmTiming;

#[test]
fn buzzer_is_on_channel_a_of_its_slice() {
    assert_eq!(pwm_slice_for_gpio(BUZZER_GPIO), BUZZER_PWM_SLICE);
    // Even GPIOs are channel A.
    assert_eq!(BUZZER_GPIO % 2, 0);
}

#[test]
fn pins_do_not_collide() {
    assert_ne!(BUZZER_GPIO, WS2812_GPIO);
    assert!(BUZZER_GPIO < 30 && WS2812_GPIO < 30);
}

#[test]
fn clocks_come_up_before_peripherals_and_core1_before_core0_loop() {
    let pos = |needle: &str| {
        BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains(needle))
            .unwrap_or_else(|| panic!("no boot step mentions {needle}"))
    };
    assert!(pos("Clocks") < pos("Buzzer"));
    assert!(pos("Buzzer") < pos("Core 1"));
    assert!(pos("Core 1") < pos("Core 0"));
}

#[test]
fn core1_stack_is_16_kib() {
    assert_eq!(CORE1_STACK_BYTES, 16_384);
}

#[test]
fn every_note_is_playable_at_boot_clock() {
    for note in Note::PITCHED {
        let timing = PwmTiming::for_frequency(SYS_CLOCK_HZ, note.frequency_hz())
            .unwrap()
            .unwrap();
        let actual = timing.actual_frequency_hz(SYS_CLOCK_HZ);
        assert!(
            actual.abs_diff(note.frequency_hz()) <= 1,
            "{} Hz came out as {actual} Hz",
            note.frequency_hz()
        );
    }
}

#[test]
fn hardfault_handler_module_present() {
    assert!(HARDFAULT_DEFINED);
}

#[test]
fn ws2812_line_stays_low_for_the_latch_time_once() {
    use firmware::matrix::{LATCH_TOP_UP_US, PIO_WS2812_RESET_US};
    use platform::config::LATCH_SETTLE_US;

    assert_eq!(PIO_WS2812_RESET_US + LATCH_TOP_UP_US, LATCH_SETTLE_US);
    assert!(LATCH_TOP_UP_US < LATCH_SETTLE_US);
}
