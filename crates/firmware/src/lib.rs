//! Melody Matrix Firmware
//!
//! Dual-core RP2040 firmware: core 0 plays a melody on a PWM buzzer while
//! core 1 cycles pictures on a 5x5 WS2812 matrix.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (main.rs, tasks)
//!         ↓
//! Drivers (buzzer, matrix)  ── implement platform::{ToneOutput, LedStrip}
//!         ↓
//! Platform HAL (Embassy, RP2040 PWM + PIO)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the RP2040 target (embassy-rp, defmt)
//! - `emulator` - Build for desktop testing (tokio, tracing, terminal matrix)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release -p firmware --target thumbv6m-none-eabi --features hardware
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run -p firmware --example emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]

pub mod boot;
pub mod buzzer;
pub mod exception_handlers;
pub mod matrix;
pub mod tasks;

pub use tasks::{ImageShow, MelodyPlayer};

#[cfg(feature = "hardware")]
pub use buzzer::PwmBuzzer;

#[cfg(feature = "hardware")]
pub use matrix::PioMatrix;

#[cfg(feature = "emulator")]
pub use buzzer::ConsoleBuzzer;

#[cfg(feature = "emulator")]
pub use matrix::TerminalMatrix;
