//! Emulator buzzer: logs each tone change instead of making sound.

use platform::note::Note;
use platform::ToneOutput;

/// [`ToneOutput`] that reports tones through `tracing`.
#[derive(Debug, Default)]
pub struct ConsoleBuzzer {
    frequency_hz: u32,
    changes: u64,
}

impl ConsoleBuzzer {
    /// Silent buzzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency currently "sounding", 0 when silent.
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Number of tone changes seen.
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

impl ToneOutput for ConsoleBuzzer {
    type Error = core::convert::Infallible;

    async fn set_frequency(&mut self, frequency_hz: u32) -> Result<(), Self::Error> {
        self.frequency_hz = frequency_hz;
        self.changes = self.changes.saturating_add(1);
        if frequency_hz == 0 {
            tracing::debug!("buzzer off");
        } else {
            let symbol = Note::PITCHED
                .iter()
                .find(|n| n.frequency_hz() == frequency_hz)
                .map_or("?", |n| n.symbol());
            tracing::info!(hz = frequency_hz, note = symbol, "buzzer on");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tracks_frequency_and_changes() {
        let mut buzzer = ConsoleBuzzer::new();
        buzzer.set_frequency(440).await.unwrap();
        buzzer.set_frequency(0).await.unwrap();
        assert_eq!(buzzer.frequency_hz(), 0);
        assert_eq!(buzzer.changes(), 2);
    }
}
