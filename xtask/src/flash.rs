use anyhow::Result;
use colored::Colorize;

use crate::cargo::{firmware_elf, step, OnFailure, CHIP, TARGET};

pub fn run(release: bool) -> Result<()> {
    let mode = if release { "release" } else { "debug" };

    println!();
    println!("{}", format!("🔨 Building firmware ({mode} mode)...").cyan().bold());
    println!();

    let mut build = vec!["build", "-p", "firmware", "--target", TARGET, "--features", "hardware"];
    if release {
        build.push("--release");
    }
    step("Build", "cargo", &build, OnFailure::Abort)?;

    let elf = firmware_elf(release);
    show_binary_size(&elf);

    // Flash only; RTT is left to `probe-rs attach` so this task returns.
    println!("{}", format!("📡 Flashing to {CHIP}...").cyan().bold());
    println!("   {}", "Connecting to probe...".dimmed());
    step(
        "Flash",
        "probe-rs",
        &["download", "--chip", CHIP, &elf],
        OnFailure::Abort,
    )?;

    println!("{}", "🎵 Melody Matrix is running on hardware!".bold());
    println!(
        "   {}",
        format!("Use 'probe-rs attach --chip {CHIP} {elf}' to view RTT logs").dimmed()
    );
    println!();

    Ok(())
}

fn show_binary_size(elf: &str) {
    // rust-size comes from cargo-binutils; skip silently when absent.
    let Ok(out) = std::process::Command::new("rust-size").args([elf, "-A"]).output() else {
        return;
    };
    if out.status.success() {
        println!("{}", "📊 Binary size:".cyan());
        for line in String::from_utf8_lossy(&out.stdout).lines() {
            println!("   {}", line.dimmed());
        }
        println!();
    }
}
