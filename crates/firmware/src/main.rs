//! Melody Matrix Firmware - Main Entry Point
//!
//! Hardware-only entry point for the RP2040. Two executors, one per core;
//! see [`firmware::boot::BOOT_SEQUENCE_STEPS`] for the order.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::unwrap;
use embassy_executor::Executor;
use embassy_rp::bind_interrupts;
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use static_cell::StaticCell;

use firmware::boot::{self, CORE1_STACK_BYTES};
use firmware::tasks::{matrix_task, melody_task};
use firmware::{PioMatrix, PwmBuzzer};

// Logging transport + panic handler
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

static mut CORE1_STACK: Stack<CORE1_STACK_BYTES> = Stack::new();
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

#[entry]
fn main() -> ! {
    let (name, version) = boot::banner();
    defmt::info!("{=str} v{=str}", name, version);

    // Step 1: clocks (clk_sys = 125 MHz)
    let p = embassy_rp::init(Default::default());
    defmt::info!(
        "RP2040 up: clk_sys={=u32} Hz",
        embassy_rp::clocks::clk_sys_freq()
    );

    // Step 2: buzzer on GPIO 10 / PWM slice 5 A, silent until the first note
    let mut pwm_config = PwmConfig::default();
    pwm_config.enable = false;
    let buzzer = PwmBuzzer::new(Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config));

    // Step 3: core 1 owns PIO0 + DMA_CH0 + GPIO 7 and the image task
    let (pio0, dma, led_pin) = (p.PIO0, p.DMA_CH0, p.PIN_7);
    spawn_core1(
        p.CORE1,
        // SAFETY: the only reference ever taken to CORE1_STACK, before core 1 runs.
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || {
            let mut pio = Pio::new(pio0, Irqs);
            let program = PioWs2812Program::new(&mut pio.common);
            let ws2812 = PioWs2812::new(&mut pio.common, pio.sm0, dma, led_pin, &program);
            let matrix: PioMatrix<'static, PIO0, { boot::WS2812_STATE_MACHINE }> =
                PioMatrix::new(ws2812);
            defmt::info!(
                "core 1: WS2812 on GPIO {=u8} (PIO0 SM{=usize})",
                boot::WS2812_GPIO,
                boot::WS2812_STATE_MACHINE
            );

            let executor1 = EXECUTOR1.init(Executor::new());
            executor1.run(|spawner| unwrap!(spawner.spawn(matrix_task(matrix))));
        },
    );

    // Step 4: core 0 runs the melody
    defmt::info!(
        "core 0: buzzer on GPIO {=u8} (PWM slice {=u8} A)",
        boot::BUZZER_GPIO,
        boot::BUZZER_PWM_SLICE
    );
    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| unwrap!(spawner.spawn(melody_task(buzzer))));
}
