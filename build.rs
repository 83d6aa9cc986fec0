use std::process::Command;

fn main() {
    // Declare custom cfg for cargo check-cfg
    println!("cargo::rustc-check-cfg=cfg(distribute)");

    // Prefer git describe, fall back to the package version outside a checkout
    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| {
            std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string())
        });

    println!("cargo:rustc-env=GIT_VERSION={}", version);

    if std::env::var("PROFILE").as_deref() == Ok("distribute") {
        println!("cargo:rustc-cfg=distribute");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
}
