fn main() {
    // the footer reads its copyright year from this stamp
    let stamp = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamp}");

    // The catalog is embedded at compile time.
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
