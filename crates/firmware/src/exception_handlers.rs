//! Cortex-M exception handlers for the Melody Matrix firmware.
//!
//! The RP2040's Cortex-M0+ has no MemManage, BusFault or UsageFault vectors,
//! so every fault escalates to **HardFault**: invalid memory access, an
//! undefined instruction, an unaligned access, or a stack overflow caught by
//! flip-link (the stack sits below `.bss`+`.data` and runs off the bottom of
//! RAM instead of into static data).
//!
//! # Hardware-only handler
//!
//! The `#[cortex_m_rt::exception]` attribute requires ARM target intrinsics and
//! is therefore gated behind `#[cfg(feature = "hardware")]`. The module itself
//! (and `HARDFAULT_DEFINED`) compiles unconditionally so host tests can verify
//! the module exists without needing an ARM toolchain.

#![allow(clippy::doc_markdown)]
/// Marker constant — checked by the boot tests to verify this module exists.
pub const HARDFAULT_DEFINED: bool = true;

/// HardFault exception handler (hardware target only).
///
/// Logs the stacked PC and LR over defmt/RTT, then executes `udf`. A fault
/// inside HardFault locks the core up, which probe-rs reports and halts on.
/// Either core can take it; the other keeps running until the probe resets
/// the chip.
///
/// # Safety
///
/// Never returns; returning from a HardFault handler is undefined behavior.
#[cfg(feature = "hardware")]
#[cortex_m_rt::exception]
#[allow(unsafe_code)]
unsafe fn HardFault(ef: &cortex_m_rt::ExceptionFrame) -> ! {
    defmt::error!(
        "HardFault on core {=u8}: pc=0x{=u32:08X} lr=0x{=u32:08X} frame at 0x{=u32:08X}",
        embassy_rp::pac::SIO.cpuid().read() as u8,
        ef.pc(),
        ef.lr(),
        ef as *const _ as u32
    );
    defmt::flush();
    cortex_m::asm::udf()
}
