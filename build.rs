use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Stamped into the startup log so a stale binary is easy to spot.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id);
    println!("cargo:rerun-if-changed=src");
}
