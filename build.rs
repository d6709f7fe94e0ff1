//! Build script for the game firmware
//!
//! Handles:
//! - Linker scripts for bare-metal targets (cortex-m-rt, defmt)
//! - Nothing on host builds, so the test suite links normally

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only bare-metal targets get the firmware linker scripts
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "none" {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
