use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    println!("cargo:rustc-env=GOFIN_BUILD_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));

    let status = match git_output(&["status", "--porcelain"]).as_str() {
        "unknown" => "unknown",
        "" => "clean",
        _ => "dirty",
    };
    println!("cargo:rustc-env=GOFIN_BUILD_STATUS={status}");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=GOFIN_BUILD_TIMESTAMP={timestamp}");
}

/// Trimmed stdout of a git command, or `unknown` when git is unavailable.
fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
