//! Tests for the one-second image timer.
// Integration test file: unwrap/indexing/arithmetic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

use embassy_time::{Duration, Instant};
use platform::image_cycler::ImageCycler;
use platform::images::IMAGE_COUNT;

fn secs(s: u64) -> Instant {
    Instant::from_secs(s)
}

#[test]
fn cycles_one_through_five_then_zero() {
    let mut c = ImageCycler::start(IMAGE_COUNT, secs(0));
    assert_eq!(c.index(), 0);
    let shown: Vec<usize> = (1..=7).filter_map(|t| c.poll(secs(t))).collect();
    assert_eq!(shown, vec![1, 2, 3, 4, 5, 0, 1]);
}

#[test]
fn one_advance_per_overrun() {
    let mut c = ImageCycler::start(IMAGE_COUNT, secs(0));
    // Five seconds late still moves a single step.
    assert_eq!(c.poll(secs(5)), Some(1));
    assert_eq!(c.poll(secs(5)), None);
}

#[test]
fn reschedules_from_observed_time() {
    let mut c = ImageCycler::start(IMAGE_COUNT, secs(0));
    let late = Instant::from_millis(1_250);
    assert_eq!(c.poll(late), Some(1));
    assert_eq!(c.deadline(), late + Duration::from_secs(1));
    assert_eq!(c.poll(secs(2)), None);
}

#[test]
fn custom_interval() {
    let mut c = ImageCycler::with_interval(3, Duration::from_millis(100), secs(0));
    assert_eq!(c.poll(Instant::from_millis(100)), Some(1));
    assert_eq!(c.poll(Instant::from_millis(200)), Some(2));
    assert_eq!(c.poll(Instant::from_millis(300)), Some(0));
}
