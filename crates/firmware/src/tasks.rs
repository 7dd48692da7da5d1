//! The two long-running loops: melody on core 0, images on core 1.
//!
//! Each runner owns its scheduler state and its driver outright. Nothing is
//! shared between them, so there are no locks, channels or atomics here; the
//! cores never talk to each other after boot.
//!
//! Both loops sleep until their next deadline with `Timer::at` and then call
//! `advance` with the current time. `advance` is public so tests can drive a
//! runner with synthetic instants instead of waiting on real timers.
//!
//! Driver errors are logged and counted. The loop carries on with the next
//! transition; there are no retries.

use embassy_time::{Instant, Timer};
use platform::images::Image;
use platform::melody::Melody;
use platform::{ImageCycler, LedBuffer, LedStrip, ToneOutput, ToneScheduler};

/// Plays a melody on a [`ToneOutput`], forever.
pub struct MelodyPlayer<T: ToneOutput> {
    buzzer: T,
    scheduler: ToneScheduler,
    faults: u32,
}

impl<T: ToneOutput> MelodyPlayer<T> {
    /// Start the first step of `melody` at `now`.
    pub async fn start(buzzer: T, melody: &Melody, now: Instant) -> Self {
        let (scheduler, frequency_hz) = ToneScheduler::start(melody, now);
        let mut player = Self {
            buzzer,
            scheduler,
            faults: 0,
        };
        player.apply(frequency_hz).await;
        player
    }

    /// Perform the transition due at `now`, if any.
    ///
    /// Returns the frequency that was applied.
    pub async fn advance(&mut self, now: Instant) -> Option<u32> {
        let frequency_hz = self.scheduler.poll(now)?;
        self.apply(frequency_hz).await;
        Some(frequency_hz)
    }

    /// When the next transition is due.
    pub fn deadline(&self) -> Instant {
        self.scheduler.deadline()
    }

    /// Playback position.
    pub fn scheduler(&self) -> &ToneScheduler {
        &self.scheduler
    }

    /// The driver.
    pub fn buzzer(&self) -> &T {
        &self.buzzer
    }

    /// Driver errors seen so far.
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Play until power-off.
    pub async fn run(mut self) -> ! {
        loop {
            Timer::at(self.deadline()).await;
            self.advance(Instant::now()).await;
        }
    }

    async fn apply(&mut self, frequency_hz: u32) {
        match self.buzzer.set_frequency(frequency_hz).await {
            Ok(()) => {
                #[cfg(feature = "hardware")]
                defmt::debug!(
                    "step {=usize} {=str}: {=u32} Hz",
                    self.scheduler.index(),
                    self.scheduler.current().note.symbol(),
                    frequency_hz
                );
                #[cfg(feature = "emulator")]
                tracing::debug!(
                    step = self.scheduler.index(),
                    phase = ?self.scheduler.phase(),
                    hz = frequency_hz,
                    "tone"
                );
            }
            #[allow(unused_variables)]
            Err(error) => {
                self.faults = self.faults.saturating_add(1);
                #[cfg(feature = "hardware")]
                defmt::warn!(
                    "buzzer: {=u32} Hz rejected: {}",
                    frequency_hz,
                    defmt::Debug2Format(&error)
                );
                #[cfg(feature = "emulator")]
                tracing::warn!(hz = frequency_hz, ?error, "buzzer rejected tone");
            }
        }
    }
}

/// Cycles an image catalog on an [`LedStrip`], forever.
pub struct ImageShow<S: LedStrip> {
    strip: S,
    images: &'static [Image],
    cycler: ImageCycler,
    buffer: LedBuffer,
    faults: u32,
}

impl<S: LedStrip> ImageShow<S> {
    /// Arm the timer at `now`. Nothing is sent until the first switch.
    pub fn start(strip: S, images: &'static [Image], now: Instant) -> Self {
        Self {
            strip,
            images,
            cycler: ImageCycler::start(images.len(), now),
            buffer: LedBuffer::new(),
            faults: 0,
        }
    }

    /// Switch image if the interval has elapsed at `now`.
    ///
    /// Returns the index of the image that was sent.
    pub async fn advance(&mut self, now: Instant) -> Option<usize> {
        let index = self.cycler.poll(now)?;
        let image = self.images.get(index)?;
        self.buffer.load_image(image);
        match self.strip.write(&self.buffer.frame()).await {
            Ok(()) => {
                #[cfg(feature = "hardware")]
                defmt::debug!("image {=usize}", index);
                #[cfg(feature = "emulator")]
                tracing::debug!(index, "image");
            }
            #[allow(unused_variables)]
            Err(error) => {
                self.faults = self.faults.saturating_add(1);
                #[cfg(feature = "hardware")]
                defmt::warn!(
                    "matrix: image {=usize} not sent: {}",
                    index,
                    defmt::Debug2Format(&error)
                );
                #[cfg(feature = "emulator")]
                tracing::warn!(index, ?error, "matrix write failed");
            }
        }
        Some(index)
    }

    /// When the next switch is due.
    pub fn deadline(&self) -> Instant {
        self.cycler.deadline()
    }

    /// Current buffer contents, chain order.
    pub fn buffer(&self) -> &LedBuffer {
        &self.buffer
    }

    /// The driver.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Driver errors seen so far.
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Cycle until power-off.
    pub async fn run(mut self) -> ! {
        loop {
            Timer::at(self.deadline()).await;
            self.advance(Instant::now()).await;
        }
    }
}

/// Embassy task for the buzzer — hardware target only.
///
/// Spawned on the core 0 executor.
#[cfg(feature = "hardware")]
#[embassy_executor::task]
pub async fn melody_task(buzzer: crate::buzzer::PwmBuzzer<'static>) -> ! {
    defmt::info!("melody: {=usize} steps", platform::melody::MELODY.len());
    MelodyPlayer::start(buzzer, &platform::melody::MELODY, Instant::now())
        .await
        .run()
        .await
}

/// Embassy task for the LED matrix — hardware target only.
///
/// Spawned on the core 1 executor, next to the PIO program it drives.
#[cfg(feature = "hardware")]
#[embassy_executor::task]
pub async fn matrix_task(
    matrix: crate::matrix::PioMatrix<
        'static,
        embassy_rp::peripherals::PIO0,
        { crate::boot::WS2812_STATE_MACHINE },
    >,
) -> ! {
    defmt::info!("matrix: {=usize} images", platform::images::IMAGES.len());
    ImageShow::start(matrix, &platform::images::IMAGES, Instant::now())
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::melody::{Beat, Step};
    use platform::mocks::{MockBuzzer, MockStrip};
    use platform::Note;

    static SHORT: [Step; 2] = [
        Step::new(Note::E, Beat::Quarter),
        Step::new(Note::G, Beat::Eighth),
    ];

    #[tokio::test]
    async fn player_sounds_first_note_on_start() {
        let melody = Melody::new(&SHORT);
        let player = MelodyPlayer::start(MockBuzzer::new(), &melody, Instant::from_millis(0)).await;
        assert_eq!(player.buzzer().history(), &[330]);
        assert_eq!(player.deadline(), Instant::from_millis(375));
    }

    #[tokio::test]
    async fn player_ignores_early_polls() {
        let melody = Melody::new(&SHORT);
        let mut player =
            MelodyPlayer::start(MockBuzzer::new(), &melody, Instant::from_millis(0)).await;
        assert_eq!(player.advance(Instant::from_millis(10)).await, None);
        assert_eq!(player.buzzer().history().len(), 1);
    }

    #[tokio::test]
    async fn show_is_dark_until_first_switch() {
        let show = ImageShow::start(
            MockStrip::new(),
            &platform::images::IMAGES,
            Instant::from_secs(0),
        );
        assert_eq!(show.strip().write_count(), 0);
        assert_eq!(show.buffer(), &LedBuffer::new());
    }
}
