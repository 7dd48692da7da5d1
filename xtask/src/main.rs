// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod cargo;
mod check;
mod doc;
mod emu;
mod flash;
mod tables;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Melody Matrix development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and flash the firmware to the RP2040 via probe-rs
    Flash {
        /// Build and flash release version
        #[arg(short, long)]
        release: bool,
    },
    /// Run the desktop emulator (terminal matrix + logged buzzer)
    Emu {
        /// Build in release mode
        #[arg(short, long)]
        release: bool,
        /// tracing filter, e.g. "debug" to log every tone change
        #[arg(long)]
        log: Option<String>,
    },
    /// Check firmware builds for both hardware and emulator targets
    Check,
    /// Run all tests (unit, integration, and doc)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Build and optionally open documentation
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
    /// Print the melody with beat lengths and PWM dividers
    Melody,
    /// Print the logical → physical LED wiring table
    Wiring,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Flash { release } => flash::run(release),
        Commands::Emu { release, log } => emu::run(release, log.as_deref()),
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Doc { open } => doc::run(open),
        Commands::Melody => tables::melody(),
        Commands::Wiring => tables::wiring(),
    }
}
