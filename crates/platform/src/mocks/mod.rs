//! Mock implementations for testing
//!
//! Recording doubles for [`ToneOutput`] and [`LedStrip`], used by the unit
//! tests here and by the firmware runner tests.

#![cfg(any(test, feature = "std"))]

use crate::config::LED_COUNT;
use crate::pixel::fifo_word;
use crate::*;

/// Error injected by the mocks on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

impl core::fmt::Display for MockFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("injected mock fault")
    }
}

impl std::error::Error for MockFault {}

/// Mock buzzer recording every frequency it is asked to play
pub struct MockBuzzer {
    history: heapless::Vec<u32, 512>,
    fail_next: bool,
}

impl MockBuzzer {
    /// Create a silent buzzer with an empty history
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
            fail_next: false,
        }
    }

    /// Frequencies requested so far, oldest first
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Last requested frequency (0 if never driven)
    pub fn current(&self) -> u32 {
        self.history.last().copied().unwrap_or(0)
    }

    /// Make the next `set_frequency` call fail
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl Default for MockBuzzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneOutput for MockBuzzer {
    type Error = MockFault;

    async fn set_frequency(&mut self, frequency_hz: u32) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next) {
            return Err(MockFault);
        }
        // Drop the oldest entries once full.
        if self.history.is_full() {
            self.history.remove(0);
        }
        let _ = self.history.push(frequency_hz);
        Ok(())
    }
}

/// Mock LED strip keeping every frame it receives
pub struct MockStrip {
    frames: heapless::Vec<[RGB8; LED_COUNT], 16>,
    writes: usize,
    fail_next: bool,
}

impl MockStrip {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            writes: 0,
            fail_next: false,
        }
    }

    /// Recorded frames, oldest first (the 16 most recent)
    pub fn frames(&self) -> &[[RGB8; LED_COUNT]] {
        &self.frames
    }

    /// Most recent frame
    pub fn last_frame(&self) -> Option<&[RGB8; LED_COUNT]> {
        self.frames.last()
    }

    /// Successful writes since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// FIFO words the PIO would have received for the last frame
    pub fn last_fifo_words(&self) -> Option<[u32; LED_COUNT]> {
        self.last_frame().map(|frame| frame.map(fifo_word))
    }

    /// Make the next `write` call fail
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl Default for MockStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for MockStrip {
    type Error = MockFault;

    async fn write(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next) {
            return Err(MockFault);
        }
        if self.frames.is_full() {
            self.frames.remove(0);
        }
        let _ = self.frames.push(*frame);
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_buzzer() {
        let mut buzzer = MockBuzzer::new();
        assert_eq!(buzzer.current(), 0);

        buzzer.set_frequency(262).await.unwrap();
        buzzer.set_frequency(0).await.unwrap();
        assert_eq!(buzzer.history(), &[262, 0]);

        buzzer.fail_next();
        assert_eq!(buzzer.set_frequency(440).await, Err(MockFault));
        assert_eq!(buzzer.history().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_strip() {
        let mut strip = MockStrip::new();
        let mut frame = [RGB8::default(); LED_COUNT];
        frame[0] = RGB8::new(0x11, 0x22, 0x33);

        strip.write(&frame).await.unwrap();
        assert_eq!(strip.write_count(), 1);
        assert_eq!(strip.last_fifo_words().unwrap()[0], 0x2211_3300);

        strip.fail_next();
        assert!(strip.write(&frame).await.is_err());
        assert_eq!(strip.write_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_strip_keeps_recent_frames() {
        let mut strip = MockStrip::new();
        for i in 0..20u8 {
            strip.write(&[RGB8::new(i, 0, 0); LED_COUNT]).await.unwrap();
        }
        assert_eq!(strip.frames().len(), 16);
        assert_eq!(strip.last_frame().unwrap()[0].r, 19);
        assert_eq!(strip.write_count(), 20);
    }
}
