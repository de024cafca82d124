//! Stamps the binary with the commit, build date and profile for `--version`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Trimmed stdout of a successful git command.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

/// Short hash, suffixed `-dirty` when the work tree has local edits.
fn commit_stamp() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    match git(&["rev-parse", "--short=7", "HEAD"]) {
        Some(hash) if !hash.is_empty() => {
            let status = git(&["status", "--porcelain"]).unwrap_or_default();
            if status.is_empty() {
                hash
            } else {
                format!("{}-dirty", hash)
            }
        }
        _ => "unknown".to_string(),
    }
}

fn build_date() -> String {
    env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn build_profile() -> String {
    env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
}

fn main() {
    let stamps = [
        ("BUILD_COMMIT", commit_stamp()),
        ("BUILD_DATE", build_date()),
        ("BUILD_PROFILE", build_profile()),
    ];
    let source: String = stamps
        .iter()
        .map(|(name, value)| format!("pub const {}: &str = {:?};\n", name, value))
        .collect();

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let dest = out_dir.join("build_info.rs");
    fs::write(dest, source).expect("write build_info.rs");

    for path in [".git/HEAD", ".git/index"] {
        println!("cargo:rerun-if-changed={}", path);
    }
    for var in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}
