use std::process::Command;

fn main() {
    // Short git SHA for the version string; "unknown" outside a checkout.
    let sha = match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(out) if out.status.success() => String::from_utf8(out.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".into()),
        _ => "unknown".into(),
    };

    println!("cargo:rustc-env=GIT_SHA={sha}");
    // Re-run on commit changes only.
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
}
