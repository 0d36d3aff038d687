// PinBridge - Build Script
//
// Bakes the version string and wires up the ESP-IDF build environment.

use std::process::Command;

fn main() {
    // ESP-IDF environment setup, only when actually targeting the chip.
    // Host builds (tests, the stdin/stdout bridge) need no ESP toolchain.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    // Get git version info
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=VERSION_STRING=PinBridge v{}-g{}", version, git_hash);

    // Rebuild if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
