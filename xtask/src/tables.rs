//! Print the compiled-in tables: melody timing and LED wiring.

use anyhow::Result;
use colored::Colorize;
use platform::config::MATRIX_SIZE;
use platform::matrix::physical_index;
use platform::melody::MELODY;
use platform::tone::{PwmTiming, DEFAULT_SYS_CLOCK_HZ};

pub fn melody() -> Result<()> {
    println!();
    println!(
        "{}",
        format!(
            "🎼 Melody: {} steps, {:.3}s per pass",
            MELODY.len(),
            secs(MELODY.pass_duration().as_micros())
        )
        .cyan()
        .bold()
    );
    println!();
    println!(
        "   {:>4}  {:<4} {:>6} {:>7}  {:>10}  {:>8}",
        "step", "note", "Hz", "beat ms", "divider", "actual"
    );

    for (index, step) in MELODY.steps().iter().enumerate() {
        let hz = step.note.frequency_hz();
        let (divider, actual) = match PwmTiming::for_frequency(DEFAULT_SYS_CLOCK_HZ, hz)? {
            Some(t) => (
                format!("{}+{}/16", t.divider_int(), t.divider_frac()),
                format!("{:.2}", t.actual_frequency_mhz(DEFAULT_SYS_CLOCK_HZ) as f64 / 1_000.0),
            ),
            None => ("off".to_string(), "-".to_string()),
        };
        let line = format!(
            "   {index:>4}  {:<4} {hz:>6} {:>7}  {divider:>10}  {actual:>8}",
            step.note.symbol(),
            step.beat.millis()
        );
        if step.note.is_rest() {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    println!();
    Ok(())
}

pub fn wiring() -> Result<()> {
    println!();
    println!("{}", "💡 LED chain position by logical (row, col):".cyan().bold());
    println!();
    for row in 0..MATRIX_SIZE {
        let cells: Vec<String> = (0..MATRIX_SIZE)
            .map(|col| format!("{:>3}", physical_index(row, col)))
            .collect();
        println!("   row {row}: {}", cells.join(""));
    }
    println!();
    Ok(())
}

fn secs(micros: u64) -> f64 {
    micros as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    /// rustfmt's default `max_width`; `xtask check` runs `cargo fmt --check`.
    const MAX_WIDTH: usize = 100;

    const SOURCES: [(&str, &str); 8] = [
        ("cargo.rs", include_str!("cargo.rs")),
        ("check.rs", include_str!("check.rs")),
        ("doc.rs", include_str!("doc.rs")),
        ("emu.rs", include_str!("emu.rs")),
        ("flash.rs", include_str!("flash.rs")),
        ("main.rs", include_str!("main.rs")),
        ("tables.rs", include_str!("tables.rs")),
        ("test.rs", include_str!("test.rs")),
    ];

    #[test]
    fn sources_fit_rustfmt_width() {
        for (file, source) in SOURCES {
            for (number, line) in source.lines().enumerate() {
                let width = line.chars().count();
                assert!(
                    width <= MAX_WIDTH,
                    "{file}:{} is {width} columns wide",
                    number.saturating_add(1)
                );
            }
        }
    }
}
