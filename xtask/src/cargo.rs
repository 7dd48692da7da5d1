//! Shared cargo/probe-rs invocation with timed, coloured status lines.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// Rust target triple of the RP2040 (Cortex-M0+).
pub const TARGET: &str = "thumbv6m-none-eabi";

/// probe-rs chip name.
pub const CHIP: &str = "RP2040";

/// How a failed step is reported.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Print output and abort the task.
    Abort,
    /// Print a warning and carry on.
    Warn,
}

/// Run `program args…`, print `✓ label` with the elapsed time, and return the
/// output. On failure, print the captured stderr (or stdout for test runs).
pub fn step(label: &str, program: &str, args: &[&str], on_failure: OnFailure) -> Result<Output> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {program} {}", args.join(" ")))?;

    let secs = start.elapsed().as_secs_f64();
    if output.status.success() {
        println!("{}", format!("  ✓ {label} in {secs:.2}s").green());
    } else {
        match on_failure {
            OnFailure::Abort => {
                eprintln!("{}", format!("  ✗ {label} failed").red().bold());
                eprintln!();
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stdout = String::from_utf8_lossy(&output.stdout);
                for line in stderr.lines().chain(stdout.lines()) {
                    eprintln!("  {line}");
                }
                anyhow::bail!("{label} failed");
            }
            OnFailure::Warn => {
                eprintln!("{}", format!("  ⚠ {label}: issues found").yellow().bold());
            }
        }
    }
    println!();
    Ok(output)
}

/// Path of the firmware ELF for a profile.
pub fn firmware_elf(release: bool) -> String {
    let profile = if release { "release" } else { "debug" };
    format!("target/{TARGET}/{profile}/firmware")
}

/// Pull the `test result:` summary line out of cargo test output.
pub fn test_summary(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .filter_map(|line| line.split("test result:").nth(1))
        .map(str::trim)
        .last()
        .unwrap_or("(summary not available)")
        .to_string()
}
