//! Puts the RP2040 `memory.x` on the linker search path for hardware builds.
//!
//! `link.x` (cortex-m-rt), `link-rp.x` (embassy-rp, places BOOT2) and
//! `defmt.x` are passed from `.cargo/config.toml`.

fn main() -> std::io::Result<()> {
    #[cfg(feature = "hardware")]
    {
        use std::path::PathBuf;

        let out = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
        std::fs::write(out.join("memory.x"), include_bytes!("../../memory.x"))?;
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rerun-if-changed=../../memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
