//! The melody and its rhythm.
//!
//! Each [`Step`] pairs a [`Note`] with a [`Beat`]. A beat is a divisor of the
//! whole-note length [`MEASURE_MS`]: quarter = 1500 / 4 = 375 ms. The player
//! sounds each note for its beat and then stays silent for the same length,
//! so a step occupies twice its beat on the timeline.

use embassy_time::Duration;

use crate::config::MEASURE_MS;
use crate::note::Note;

/// Note length as a divisor of the whole note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Beat {
    /// Divisor 1.
    Whole,
    /// Divisor 2.
    Half,
    /// Divisor 4.
    Quarter,
    /// Divisor 8.
    Eighth,
}

impl Beat {
    /// The divisor applied to [`MEASURE_MS`].
    pub const fn divisor(self) -> u32 {
        match self {
            Beat::Whole => 1,
            Beat::Half => 2,
            Beat::Quarter => 4,
            Beat::Eighth => 8,
        }
    }

    /// Beat length in whole milliseconds (truncated).
    pub const fn millis(self) -> u32 {
        match self {
            Beat::Whole => MEASURE_MS,
            Beat::Half => MEASURE_MS / 2,
            Beat::Quarter => MEASURE_MS / 4,
            Beat::Eighth => MEASURE_MS / 8,
        }
    }

    /// Beat length as a timer duration (milliseconds scaled to µs).
    #[allow(clippy::arithmetic_side_effects)] // at most 1_500 × 1_000
    pub const fn duration(self) -> Duration {
        Duration::from_micros(self.millis() as u64 * 1_000)
    }
}

/// One melody entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// What to play.
    pub note: Note,
    /// How long to play it, and how long the following gap lasts.
    pub beat: Beat,
}

impl Step {
    /// Create a step.
    pub const fn new(note: Note, beat: Beat) -> Self {
        Self { note, beat }
    }

    /// Tone (and gap) length of this step.
    pub const fn duration(self) -> Duration {
        self.beat.duration()
    }
}

/// A non-empty, cyclic sequence of steps.
#[derive(Debug, Clone, Copy)]
pub struct Melody {
    steps: &'static [Step],
}

impl Melody {
    /// Wrap a step table.
    ///
    /// Evaluated in a `const`/`static` initializer, an empty table fails the
    /// build.
    pub const fn new(steps: &'static [Step]) -> Self {
        assert!(!steps.is_empty(), "a melody needs at least one step");
        Self { steps }
    }

    /// Number of steps before the melody wraps.
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, wrapping past the end.
    pub fn step(&self, index: usize) -> Step {
        let wrapped = index.checked_rem(self.steps.len()).unwrap_or(0);
        self.steps
            .get(wrapped)
            .copied()
            .unwrap_or(Step::new(Note::Rest, Beat::Quarter))
    }

    /// Index following `index`, wrapping to 0 after the last step.
    pub fn next_index(&self, index: usize) -> usize {
        match index.checked_add(1) {
            Some(next) if next < self.steps.len() => next,
            _ => 0,
        }
    }

    /// All steps in order.
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Length of one full pass: every tone plus its equal-length gap.
    pub fn pass_duration(&self) -> Duration {
        self.steps.iter().fold(Duration::from_ticks(0), |acc, step| {
            let d = step.duration();
            acc.checked_add(d)
                .and_then(|acc| acc.checked_add(d))
                .unwrap_or(Duration::MAX)
        })
    }
}

const fn s(note: Note, beat: Beat) -> Step {
    Step::new(note, beat)
}

/// Number of steps in [`MELODY_STEPS`].
pub const MELODY_LEN: usize = 119;

/// The melody table.
pub static MELODY_STEPS: [Step; MELODY_LEN] = {
    use Beat::{Eighth, Half, Quarter, Whole};
    use Note::{CSharp, DSharp, GSharp, Rest, A, B, C, E, F, G};
    [
        s(Rest, Quarter), s(C, Quarter), s(B, Quarter), s(G, Quarter),
        s(E, Half), s(E, Half),

        s(Rest, Eighth), s(B, Eighth), s(E, Eighth), s(F, Eighth),
        s(G, Eighth), s(B, Eighth), s(A, Eighth), s(G, Eighth),
        s(F, Half), s(F, Half),

        s(Rest, Quarter), s(A, Quarter), s(F, Quarter), s(E, Quarter),
        s(DSharp, Half), s(DSharp, Half),

        s(Rest, Eighth), s(DSharp, Eighth), s(DSharp, Eighth), s(E, Eighth),
        s(F, Eighth), s(A, Eighth), s(G, Eighth), s(F, Eighth),
        s(B, Whole),

        s(Rest, Quarter), s(B, Quarter), s(A, Quarter), s(GSharp, Quarter),
        s(A, Half), s(A, Half),

        s(Rest, Eighth), s(A, Eighth), s(A, Eighth), s(B, Eighth),
        s(C, Eighth), s(E, Eighth), s(C, Eighth), s(A, Eighth),
        s(G, Whole),

        s(Rest, Quarter), s(E, Quarter), s(B, Quarter), s(G, Quarter),
        s(F, Half), s(F, Half),

        s(Rest, Eighth), s(A, Eighth), s(B, Eighth), s(C, Eighth),
        s(B, Eighth), s(A, Eighth), s(G, Eighth), s(F, Eighth),
        s(E, Whole),

        s(Rest, Quarter), s(B, Eighth), s(CSharp, Eighth),

        s(DSharp, Eighth), s(E, Eighth), s(F, Eighth), s(G, Eighth),
        s(A, Eighth), s(F, Eighth), s(C, Eighth), s(C, Eighth),
        s(B, Eighth), s(A, Eighth), s(G, Eighth), s(A, Eighth),

        s(B, Quarter), s(B, Eighth), s(CSharp, Eighth),

        s(DSharp, Eighth), s(E, Eighth), s(F, Eighth), s(G, Eighth),
        s(A, Eighth), s(F, Eighth), s(C, Eighth), s(C, Eighth),
        s(B, Eighth), s(A, Eighth), s(G, Eighth), s(A, Eighth),

        s(B, Half), s(B, Half),

        s(Rest, Quarter), s(B, Quarter), s(A, Quarter), s(GSharp, Quarter),
        s(A, Half), s(A, Half),

        s(Rest, Quarter), s(A, Quarter), s(G, Quarter), s(F, Quarter),
        s(G, Half), s(G, Half),

        s(Rest, Quarter), s(E, Quarter), s(B, Quarter), s(G, Quarter),
        s(F, Whole),

        s(Rest, Eighth), s(F, Eighth), s(G, Eighth), s(A, Eighth),
        s(B, Quarter), s(A, Eighth), s(G, Eighth), s(F, Half),
        s(E, Half),
    ]
};

/// The melody played by the buzzer.
pub static MELODY: Melody = Melody::new(&MELODY_STEPS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beat_lengths_truncate() {
        assert_eq!(Beat::Whole.millis(), 1_500);
        assert_eq!(Beat::Half.millis(), 750);
        assert_eq!(Beat::Quarter.millis(), 375);
        assert_eq!(Beat::Eighth.millis(), 187);
        assert_eq!(Beat::Eighth.duration().as_micros(), 187_000);
    }

    #[test]
    fn beat_millis_is_measure_over_divisor() {
        for beat in [Beat::Whole, Beat::Half, Beat::Quarter, Beat::Eighth] {
            assert_eq!(beat.millis(), MEASURE_MS / beat.divisor());
        }
    }

    #[test]
    fn melody_has_every_step() {
        assert_eq!(MELODY.len(), 119);
        assert!(!MELODY.is_empty());
    }

    #[test]
    fn step_wraps_past_the_end() {
        assert_eq!(MELODY.step(119), MELODY.step(0));
        assert_eq!(MELODY.next_index(118), 0);
        assert_eq!(MELODY.next_index(0), 1);
    }

    #[test]
    fn melody_starts_and_ends_as_written() {
        assert_eq!(MELODY.step(0), Step::new(Note::Rest, Beat::Quarter));
        assert_eq!(MELODY.step(1), Step::new(Note::C, Beat::Quarter));
        assert_eq!(MELODY.step(118), Step::new(Note::E, Beat::Half));
    }

    #[test]
    fn only_rests_are_silent() {
        for step in MELODY.steps() {
            assert_eq!(step.note.is_rest(), step.note.frequency_hz() == 0);
        }
    }
}
