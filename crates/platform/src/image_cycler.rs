//! One-second image timer.
//!
//! The cycler only picks the index. Loading the picture into a
//! [`crate::LedBuffer`] and transmitting it is the caller's job.
//!
//! The next deadline is taken from the instant the switch was observed, so
//! per-frame latency accumulates as drift. Nothing is shown at start: the
//! first switch, to index 1, happens one interval after [`ImageCycler::start`].

use embassy_time::{Duration, Instant};

use crate::config::IMAGE_INTERVAL;

/// Position in an image catalog and time of the next switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageCycler {
    index: usize,
    len: usize,
    interval: Duration,
    deadline: Instant,
}

impl ImageCycler {
    /// Start at index 0 with the default [`IMAGE_INTERVAL`].
    ///
    /// A `len` of 0 is treated as 1.
    pub fn start(len: usize, now: Instant) -> Self {
        Self::with_interval(len, IMAGE_INTERVAL, now)
    }

    /// Start at index 0 switching every `interval`.
    pub fn with_interval(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            interval,
            deadline: now.checked_add(interval).unwrap_or(Instant::MAX),
        }
    }

    /// Advance once if the deadline has passed.
    ///
    /// Returns the new index to display. A poll far past the deadline still
    /// advances by exactly one.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if now < self.deadline {
            return None;
        }
        self.index = self
            .index
            .checked_add(1)
            .and_then(|next| next.checked_rem(self.len))
            .unwrap_or(0);
        self.deadline = now.checked_add(self.interval).unwrap_or(Instant::MAX);
        Some(self.index)
    }

    /// Index currently displayed (0 before the first switch).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Catalog length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; the catalog has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Instant of the next switch.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_switch_is_to_index_one() {
        let mut c = ImageCycler::start(6, Instant::from_secs(0));
        assert_eq!(c.poll(Instant::from_millis(999)), None);
        assert_eq!(c.poll(Instant::from_secs(1)), Some(1));
    }

    #[test]
    fn empty_catalog_stays_on_zero() {
        let mut c = ImageCycler::start(0, Instant::from_secs(0));
        assert_eq!(c.len(), 1);
        assert_eq!(c.poll(Instant::from_secs(1)), Some(0));
    }
}
