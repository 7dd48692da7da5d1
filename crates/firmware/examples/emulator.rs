//! Melody Matrix Emulator
//!
//! Runs both loops on the desktop: the melody is logged through `tracing`
//! (stderr) and the matrix is drawn in the terminal (stdout). Each loop gets
//! its own OS thread and single-threaded runtime, the same split as the two
//! RP2040 cores.
//!
//! Run with: cargo run -p firmware --example emulator --features emulator
//! Log level: RUST_LOG=debug for every tone change.
//! Ctrl-C to exit.

use embassy_time::Instant;
use firmware::{ConsoleBuzzer, ImageShow, MelodyPlayer, TerminalMatrix};
use platform::config;
use platform::images::IMAGES;
use platform::melody::MELODY;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} v{}", config::dev_banner(), config::APP_VERSION);
    tracing::info!(
        steps = MELODY.len(),
        pass_ms = MELODY.pass_duration().as_millis(),
        images = IMAGES.len(),
        "starting"
    );

    // "Core 1": image show
    std::thread::Builder::new()
        .name("core1-matrix".into())
        .spawn(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => rt,
                Err(error) => {
                    tracing::error!(%error, "matrix runtime failed to start");
                    return;
                }
            };
            rt.block_on(async {
                ImageShow::start(TerminalMatrix::stdout(), &IMAGES, Instant::now())
                    .run()
                    .await
            })
        })?;

    // "Core 0": melody
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(async {
        MelodyPlayer::start(ConsoleBuzzer::new(), &MELODY, Instant::now())
            .await
            .run()
            .await
    })
}
