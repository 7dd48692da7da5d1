//! Tests for the tone/gap scheduler driven over the real melody.
//!
//! Time is simulated: every poll happens exactly on the deadline, which is
//! what the firmware task does when it sleeps with `Timer::at`.
// Integration test file: unwrap/indexing/arithmetic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

use embassy_time::{Duration, Instant};
use platform::melody::{Beat, MELODY};
use platform::tone_scheduler::{Phase, ToneScheduler};

/// Opening: rest for 375 ms, gap for 375 ms, then C at 262 Hz.
#[test]
fn melody_opens_with_a_quarter_rest_then_c() {
    let (mut s, first) = ToneScheduler::start(&MELODY, Instant::from_micros(0));
    assert_eq!(first, 0);
    assert_eq!(s.deadline(), Instant::from_micros(375_000));

    assert_eq!(s.poll(Instant::from_micros(375_000)), Some(0));
    assert_eq!(s.phase(), Phase::Gap);
    assert_eq!(s.deadline(), Instant::from_micros(750_000));

    assert_eq!(s.poll(Instant::from_micros(749_999)), None);
    assert_eq!(s.poll(Instant::from_micros(750_000)), Some(262));
    assert_eq!(s.index(), 1);
    assert_eq!(s.phase(), Phase::Tone);
    assert_eq!(s.deadline(), Instant::from_micros(1_125_000));
}

/// Every tone transition is followed by a silencing transition.
#[test]
fn gaps_always_silence_the_buzzer() {
    let (mut s, _) = ToneScheduler::start(&MELODY, Instant::from_micros(0));
    for _ in 0..(MELODY.len() * 2) {
        let was = s.phase();
        let out = s.poll(s.deadline()).unwrap();
        if was == Phase::Tone {
            assert_eq!(out, 0);
            assert_eq!(s.phase(), Phase::Gap);
        } else {
            assert_eq!(out, s.current().note.frequency_hz());
            assert_eq!(s.phase(), Phase::Tone);
        }
    }
}

/// One pass takes the sum of 2 × (1500 / d) ms over every step.
#[test]
fn full_pass_takes_twice_the_beats() {
    let expected_ms: u64 = MELODY
        .steps()
        .iter()
        .map(|step| 2 * u64::from(1_500 / step.beat.divisor()))
        .sum();
    assert_eq!(expected_ms * 1_000, 86_934_000);
    assert_eq!(MELODY.pass_duration(), Duration::from_micros(86_934_000));

    let start = Instant::from_micros(0);
    let (mut s, _) = ToneScheduler::start(&MELODY, start);
    for _ in 0..(MELODY.len() * 2) {
        s.poll(s.deadline());
    }
    // Back at the first step, exactly one pass later.
    assert_eq!(s.index(), 0);
    assert_eq!(s.phase(), Phase::Tone);
    let first = Beat::Quarter.duration();
    assert_eq!(s.deadline(), start + Duration::from_micros(86_934_000) + first);
}

/// Index always stays in range, for several passes.
#[test]
fn index_wraps_forever() {
    let (mut s, _) = ToneScheduler::start(&MELODY, Instant::from_micros(0));
    for _ in 0..(MELODY.len() * 6) {
        s.poll(s.deadline());
        assert!(s.index() < MELODY.len());
    }
}
