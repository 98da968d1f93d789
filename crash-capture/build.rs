use std::process::Command;

/// Stamps a build-identity tag into `CRASH_CAPTURE_VERSION` so
/// `profile::SOFTWARE_VERSION` stays stable for a given build without a
/// hand-maintained constant.
fn main() {
    let commit = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "00000000".to_string());

    println!("cargo:rustc-env=CRASH_CAPTURE_VERSION={commit}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
