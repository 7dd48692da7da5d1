//! Platform layer for the Melody Matrix firmware
//!
//! This crate holds everything that does not touch a register: the compiled-in
//! tables, the two deadline-driven state machines and the trait seams the
//! firmware drivers plug into. It is `no_std` and fully host-testable.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: boot, tasks)
//!         ↓
//! Platform (this crate: tables, schedulers, driver traits)
//!         ↓
//! Hardware Layer (embassy-rp PWM + PIO, RP2040)
//! ```
//!
//! # Modules
//!
//! ## Tone path
//! - [`note`] - note symbols and their frequencies
//! - [`melody`] - the melody table and beat durations
//! - [`tone`] - [`ToneOutput`] trait and PWM divider math
//! - [`tone_scheduler`] - the `Tone`/`Gap` state machine
//!
//! ## Image path
//! - [`pixel`] - colour + brightness records and the WS2812 wire word
//! - [`images`] - the six-image catalog
//! - [`matrix`] - serpentine remap, LED buffer and the [`LedStrip`] trait
//! - [`image_cycler`] - the one-second image timer
//!
//! # Features
//!
//! - `std`: mock drivers and `std::error::Error` impls (host tests, emulator)
//! - `defmt`: `defmt::Format` derives on all public types
//!
//! # Example
//!
//! ```
//! use embassy_time::Instant;
//! use platform::melody::MELODY;
//! use platform::tone_scheduler::ToneScheduler;
//!
//! let (mut scheduler, first) = ToneScheduler::start(&MELODY, Instant::from_micros(0));
//! assert_eq!(first, 0); // the melody opens with a rest
//! assert_eq!(scheduler.poll(Instant::from_micros(1)), None);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // pin and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

pub mod config;
pub mod image_cycler;
pub mod images;
pub mod matrix;
pub mod melody;
pub mod note;
pub mod pixel;
pub mod tone;
pub mod tone_scheduler;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use matrix::{LedBuffer, LedStrip};
pub use tone::{ToneError, ToneOutput};

// Re-export domain types
pub use image_cycler::ImageCycler;
pub use images::Image;
pub use melody::{Beat, Step};
pub use note::Note;
pub use pixel::Pixel;
pub use tone_scheduler::{Phase, ToneScheduler};

/// Colour type handed to LED strips (re-exported from `smart-leds`).
pub use smart_leds::RGB8;
