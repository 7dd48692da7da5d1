//! Tone output abstraction and PWM divider math.
//!
//! The buzzer is a plain square wave. A frequency is produced by letting the
//! PWM counter run from 0 to a fixed `top` and dividing the system clock
//! so that one counter period lasts `1 / f`:
//!
//! ```text
//! divider = clk_sys / (f × (top + 1))
//! ```
//!
//! The RP2040 divider is 8.4 fixed point (`DIV_INT` 1..=255, `DIV_FRAC`
//! 0..=15), so the result is rounded to the nearest 1/16. The rounding error
//! is not corrected; a few cents of detuning are accepted.
//!
//! With `top = 3999` and `clk_sys = 125 MHz` every note of the table lands
//! between divider 63 (B4) and 119 (C4). The lowest representable pitch is
//! about 122 Hz; anything below is reported as [`ToneError::DividerOutOfRange`].

/// Counter top value shared by every note (4000 counts per period).
pub const TONE_PWM_TOP: u16 = 3_999;

/// Default RP2040 system clock after `embassy_rp::init`.
pub const DEFAULT_SYS_CLOCK_HZ: u32 = 125_000_000;

/// Fractional bits of the RP2040 PWM clock divider.
pub const DIVIDER_FRAC_BITS: u32 = 4;

/// Smallest divider the hardware accepts (1.0) in 1/16 units.
pub const DIVIDER_MIN_X16: u32 = 1 << DIVIDER_FRAC_BITS;

/// Largest divider the hardware accepts (255 + 15/16) in 1/16 units.
pub const DIVIDER_MAX_X16: u32 = (255 << DIVIDER_FRAC_BITS) | 0xF;

/// Tone driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    /// The requested pitch needs a clock divider the PWM slice cannot hold.
    DividerOutOfRange {
        /// Requested frequency in Hz.
        frequency_hz: u32,
        /// Divider that would be needed, in 1/16 units.
        divider_x16: u32,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for ToneError {}

impl core::fmt::Display for ToneError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DividerOutOfRange {
                frequency_hz,
                divider_x16,
            } => write!(
                f,
                "{frequency_hz} Hz needs PWM divider {}/16, outside 16..={DIVIDER_MAX_X16}",
                divider_x16
            ),
        }
    }
}

/// Register-level settings for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Counter wrap value.
    pub top: u16,
    /// Clock divider in 1/16 units (`DIV_INT << 4 | DIV_FRAC`).
    pub divider_x16: u16,
    /// Channel compare level; `(top + 1) / 2` for a 50 % duty cycle.
    pub compare: u16,
}

impl PwmTiming {
    /// Compute the PWM settings for `frequency_hz`.
    ///
    /// Returns `Ok(None)` for `0`: silence means the slice is switched off,
    /// not driven at a zero duty cycle.
    pub fn for_frequency(
        base_clock_hz: u32,
        frequency_hz: u32,
    ) -> Result<Option<Self>, ToneError> {
        Self::with_top(base_clock_hz, frequency_hz, TONE_PWM_TOP)
    }

    /// Like [`PwmTiming::for_frequency`] with an explicit counter top.
    pub fn with_top(
        base_clock_hz: u32,
        frequency_hz: u32,
        top: u16,
    ) -> Result<Option<Self>, ToneError> {
        if frequency_hz == 0 {
            return Ok(None);
        }
        let counts = u64::from(top).saturating_add(1);
        let denominator = u64::from(frequency_hz).saturating_mul(counts);
        let numerator = u64::from(base_clock_hz).saturating_mul(1 << DIVIDER_FRAC_BITS);
        // Round to the nearest 1/16 step.
        let divider_x16 = numerator
            .saturating_add(denominator / 2)
            .checked_div(denominator)
            .unwrap_or(u64::MAX);
        let divider_x16 = u32::try_from(divider_x16).unwrap_or(u32::MAX);

        if !(DIVIDER_MIN_X16..=DIVIDER_MAX_X16).contains(&divider_x16) {
            return Err(ToneError::DividerOutOfRange {
                frequency_hz,
                divider_x16,
            });
        }

        let compare = u16::try_from(counts / 2).unwrap_or(u16::MAX);
        Ok(Some(Self {
            top,
            divider_x16: u16::try_from(divider_x16).unwrap_or(u16::MAX),
            compare,
        }))
    }

    /// Integer part of the divider (`DIV_INT`).
    pub const fn divider_int(&self) -> u8 {
        (self.divider_x16 >> DIVIDER_FRAC_BITS) as u8
    }

    /// Fractional part of the divider (`DIV_FRAC`, sixteenths).
    pub const fn divider_frac(&self) -> u8 {
        (self.divider_x16 & 0xF) as u8
    }

    /// Frequency the hardware will actually produce, in millihertz.
    pub fn actual_frequency_mhz(&self, base_clock_hz: u32) -> u64 {
        let counts = u64::from(self.top).saturating_add(1);
        let period_x16 = counts.saturating_mul(u64::from(self.divider_x16));
        u64::from(base_clock_hz)
            .saturating_mul(1_000 << DIVIDER_FRAC_BITS)
            .checked_div(period_x16)
            .unwrap_or(0)
    }

    /// Frequency the hardware will actually produce, rounded down to Hz.
    pub fn actual_frequency_hz(&self, base_clock_hz: u32) -> u32 {
        u32::try_from(self.actual_frequency_mhz(base_clock_hz) / 1_000).unwrap_or(u32::MAX)
    }
}

/// Square-wave tone generator.
///
/// Implemented by the PWM buzzer on hardware, by a tracing logger in the
/// emulator and by [`crate::mocks::MockBuzzer`] in tests. Not reentrant: one
/// owner drives the channel.
pub trait ToneOutput {
    /// Error type returned by the driver.
    type Error: core::fmt::Debug;

    /// Start a tone at `frequency_hz`, or stop output entirely for `0`.
    async fn set_frequency(&mut self, frequency_hz: u32) -> Result<(), Self::Error>;
}
