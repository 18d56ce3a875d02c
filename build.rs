//! Build script for the AIoT board firmware
//!
//! Handles:
//! - Linker script selection for the ESP32 binary
//!
//! Host test builds (`--no-default-features --features std`) link nothing
//! extra.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // esp-hal ships linkall.x; only the firmware binary needs it
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    }
}
