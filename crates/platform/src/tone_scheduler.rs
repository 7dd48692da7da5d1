//! Tone/gap state machine driving the buzzer.
//!
//! ```text
//!            deadline: emit 0
//!   ┌──────┐ ───────────────────▶ ┌─────┐
//!   │ Tone │                      │ Gap │
//!   └──────┘ ◀─────────────────── └─────┘
//!            deadline: index += 1, emit note
//! ```
//!
//! Each state lasts the current step's beat, so a step occupies twice its
//! beat. Every new deadline is measured from the instant the poll observed
//! the old one, not from the old deadline: a late poll shifts the rest of the
//! melody instead of being caught up.
//!
//! The scheduler never touches hardware. It returns the frequency to apply
//! and the caller forwards it to a [`crate::ToneOutput`].

use embassy_time::Instant;

use crate::melody::{Melody, Step};

/// What the buzzer is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Sounding the current note (or holding a rest).
    Tone,
    /// Silent pause after the current note.
    Gap,
}

/// Playback position in a [`Melody`].
#[derive(Debug, Clone, Copy)]
pub struct ToneScheduler {
    melody: Melody,
    index: usize,
    phase: Phase,
    deadline: Instant,
}

impl ToneScheduler {
    /// Begin at step 0 in [`Phase::Tone`].
    ///
    /// Returns the scheduler and the frequency to start sounding now.
    pub fn start(melody: &Melody, now: Instant) -> (Self, u32) {
        let first = melody.step(0);
        let scheduler = Self {
            melody: *melody,
            index: 0,
            phase: Phase::Tone,
            deadline: deadline_after(now, first),
        };
        (scheduler, first.note.frequency_hz())
    }

    /// Advance if the current deadline has passed.
    ///
    /// Returns the frequency to apply (`0` = silence) when a transition
    /// happened, `None` otherwise. At most one transition per call.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        if now < self.deadline {
            return None;
        }
        match self.phase {
            Phase::Tone => {
                self.phase = Phase::Gap;
                self.deadline = deadline_after(now, self.current());
                Some(0)
            }
            Phase::Gap => {
                self.index = self.melody.next_index(self.index);
                self.phase = Phase::Tone;
                let step = self.current();
                self.deadline = deadline_after(now, step);
                Some(step.note.frequency_hz())
            }
        }
    }

    /// Index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Instant of the next transition.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// The step being played (or whose gap is running).
    pub fn current(&self) -> Step {
        self.melody.step(self.index)
    }
}

fn deadline_after(now: Instant, step: Step) -> Instant {
    now.checked_add(step.duration()).unwrap_or(Instant::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::{Beat, MELODY};
    use crate::note::Note;
    use embassy_time::Duration;

    static TWO: [Step; 2] = [
        Step::new(Note::A, Beat::Half),
        Step::new(Note::Rest, Beat::Eighth),
    ];

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn start_sounds_first_step() {
        let melody = Melody::new(&TWO);
        let (s, hz) = ToneScheduler::start(&melody, at(10));
        assert_eq!(hz, 440);
        assert_eq!(s.phase(), Phase::Tone);
        assert_eq!(s.index(), 0);
        assert_eq!(s.deadline(), at(760));
    }

    #[test]
    fn nothing_happens_before_deadline() {
        let (mut s, _) = ToneScheduler::start(&MELODY, at(0));
        assert_eq!(s.poll(at(374)), None);
        assert_eq!(s.phase(), Phase::Tone);
    }

    #[test]
    fn tone_then_gap_then_next_note() {
        let melody = Melody::new(&TWO);
        let (mut s, _) = ToneScheduler::start(&melody, at(0));

        assert_eq!(s.poll(at(750)), Some(0));
        assert_eq!(s.phase(), Phase::Gap);
        assert_eq!(s.index(), 0);
        assert_eq!(s.deadline(), at(1_500));

        assert_eq!(s.poll(at(1_500)), Some(0)); // the rest
        assert_eq!(s.phase(), Phase::Tone);
        assert_eq!(s.index(), 1);
        assert_eq!(s.deadline(), at(1_687));
    }

    #[test]
    fn late_poll_reschedules_from_now() {
        let melody = Melody::new(&TWO);
        let (mut s, _) = ToneScheduler::start(&melody, at(0));
        assert_eq!(s.poll(at(900)), Some(0));
        assert_eq!(s.deadline(), at(1_650));
    }

    #[test]
    fn one_transition_per_poll_even_when_far_behind() {
        let melody = Melody::new(&TWO);
        let (mut s, _) = ToneScheduler::start(&melody, at(0));
        assert_eq!(s.poll(at(10_000)), Some(0));
        assert_eq!(s.phase(), Phase::Gap);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn index_wraps_after_last_step() {
        let melody = Melody::new(&TWO);
        let (mut s, _) = ToneScheduler::start(&melody, at(0));
        let mut now = s.deadline();
        s.poll(now);
        for _ in 0..3 {
            now = s.deadline();
            s.poll(now);
        }
        assert_eq!(s.index(), 0);
        assert_eq!(s.phase(), Phase::Tone);
        assert_eq!(s.deadline(), now + Duration::from_millis(750));
    }

    #[test]
    fn deadline_saturates_at_end_of_time() {
        let (s, _) = ToneScheduler::start(&MELODY, Instant::MAX);
        assert_eq!(s.deadline(), Instant::MAX);
    }
}
