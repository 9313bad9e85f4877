use std::env;

fn main() {
    let version = env::var("CATARACT_EYE_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rerun-if-env-changed=CATARACT_EYE_VERSION");
    println!("cargo:rustc-env=CATARACT_EYE_VERSION={version}");
}
