//! Passive buzzer on an RP2040 PWM slice
//!
//! The buzzer sits on GPIO 10, which is channel A of PWM slice 5. Pitch is
//! set by the clock divider with a fixed counter top, so every note uses the
//! same 50 % compare level. See [`platform::tone`] for the divider math.
//!
//! Silence disables the slice instead of writing a zero duty cycle.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::extra::U4;
use fixed::FixedU16;
use platform::tone::{PwmTiming, ToneError};
use platform::ToneOutput;

/// Buzzer driven by one PWM channel.
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    config: Config,
    base_clock_hz: u32,
    frequency_hz: u32,
}

impl<'d> PwmBuzzer<'d> {
    /// Take ownership of a configured PWM output and silence it.
    ///
    /// The divider base is read from the running `clk_sys`.
    pub fn new(pwm: Pwm<'d>) -> Self {
        Self::with_clock(pwm, embassy_rp::clocks::clk_sys_freq())
    }

    /// Like [`PwmBuzzer::new`] with an explicit divider base clock.
    pub fn with_clock(mut pwm: Pwm<'d>, base_clock_hz: u32) -> Self {
        let mut config = Config::default();
        config.enable = false;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self {
            pwm,
            config,
            base_clock_hz,
            frequency_hz: 0,
        }
    }

    /// Frequency currently sounding, 0 when silent.
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

impl ToneOutput for PwmBuzzer<'_> {
    type Error = ToneError;

    async fn set_frequency(&mut self, frequency_hz: u32) -> Result<(), Self::Error> {
        match PwmTiming::for_frequency(self.base_clock_hz, frequency_hz)? {
            None => {
                self.config.enable = false;
                self.config.compare_a = 0;
            }
            Some(timing) => {
                self.config.top = timing.top;
                self.config.compare_a = timing.compare;
                self.config.divider = FixedU16::<U4>::from_bits(timing.divider_x16);
                self.config.enable = true;
                defmt::trace!(
                    "PWM: {=u32} Hz -> div {=u8}.{=u8}/16 top {=u16}",
                    frequency_hz,
                    timing.divider_int(),
                    timing.divider_frac(),
                    timing.top
                );
            }
        }
        self.pwm.set_config(&self.config);
        self.frequency_hz = frequency_hz;
        Ok(())
    }
}
