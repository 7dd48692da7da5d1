use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, OnFailure, TARGET};

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking firmware builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    step(
        &format!("Hardware target ({TARGET})"),
        "cargo",
        &["check", "-p", "firmware", "--target", TARGET, "--features", "hardware"],
        OnFailure::Abort,
    )?;
    step(
        "Emulator target (host)",
        "cargo",
        &["check", "-p", "firmware", "--features", "emulator", "--examples"],
        OnFailure::Abort,
    )?;
    step(
        "Platform crate (no_std)",
        "cargo",
        &["check", "-p", "platform", "--target", TARGET, "--no-default-features"],
        OnFailure::Abort,
    )?;
    // Lints and formatting are reported, not enforced.
    step(
        "Clippy",
        "cargo",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;
    step("Formatting", "cargo", &["fmt", "--all", "--check"], OnFailure::Warn)?;

    println!(
        "{}",
        format!("✓ All checks completed in {:.2}s", total_start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
