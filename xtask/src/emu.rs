use anyhow::{Context, Result};
use colored::Colorize;
use platform::config;
use std::process::Command;

/// Build and run the desktop emulator in the foreground.
pub fn run(release: bool, log: Option<&str>) -> Result<()> {
    println!();
    println!("{}", format!("▶ {}", config::dev_banner()).cyan().bold());
    println!("   {}", "Ctrl-C to stop".dimmed());
    println!();

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-p", "firmware", "--example", "emulator", "--features", "emulator"]);
    if release {
        cmd.arg("--release");
    }
    if let Some(filter) = log {
        cmd.env("RUST_LOG", filter);
    }

    // Inherit stdio: the matrix is drawn straight to this terminal.
    let status = cmd.status().context("Failed to launch the emulator")?;
    if !status.success() {
        anyhow::bail!("Emulator exited with {status}");
    }
    Ok(())
}
