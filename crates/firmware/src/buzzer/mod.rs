//! Buzzer drivers
//!
//! Concrete [`platform::ToneOutput`] implementations, feature-gated by build
//! target:
//! - `pwm` — RP2040 PWM slice driving a passive buzzer (`hardware` feature)
//! - `console` — tracing logger for the desktop emulator (`emulator` feature)
//!
//! Tests use [`platform::mocks::MockBuzzer`].
//!
//! # Dependency Injection
//!
//! ```rust,ignore
//! async fn melody<T: platform::ToneOutput>(buzzer: T) { /* ... */ }
//!
//! // Hardware:
//! melody(PwmBuzzer::new(Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, cfg)));
//! // Emulator:
//! melody(ConsoleBuzzer::new());
//! ```

#[cfg(feature = "hardware")]
pub mod pwm;

#[cfg(feature = "emulator")]
pub mod console;

#[cfg(feature = "hardware")]
pub use pwm::PwmBuzzer;

#[cfg(feature = "emulator")]
pub use console::ConsoleBuzzer;
