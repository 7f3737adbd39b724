//! Generate UniFFI Swift and Kotlin bindings for Sift
//!
//! Run: cargo run --bin generate-bindings
//!
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │ Inputs:                                                                     │
//! │   <target dir>/release/libsift.{dylib,so}  ← Built library for bindgen      │
//! │   (CARGO_TARGET_DIR, else the workspace's target/)                         │
//! │                                                                             │
//! │ Outputs:                                                                    │
//! │   generated/swift/sift.swift          ← Swift bindings                      │
//! │   generated/swift/siftFFI.h           ← C header                            │
//! │   generated/swift/module.modulemap    ← Clang module map                    │
//! │   generated/kotlin/…/sift.kt          ← Kotlin bindings                     │
//! └─────────────────────────────────────────────────────────────────────────────┘

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let rust_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let library = library_path(rust_dir, env::var_os("CARGO_TARGET_DIR").map(PathBuf::from));
    let library = library.to_string_lossy();

    println!("Building Rust library...");
    run_cmd("cargo", &["build", "--release", "--lib"], rust_dir);

    for language in ["swift", "kotlin"] {
        println!("Generating {} bindings...", language);
        let out_dir = format!("generated/{}", language);
        run_cmd(
            "cargo",
            &[
                "run",
                "--bin",
                "uniffi-bindgen",
                "generate",
                "--library",
                &library,
                "--language",
                language,
                "--out-dir",
                &out_dir,
            ],
            rust_dir,
        );
    }

    println!("Writing modulemap...");
    fs::write(
        rust_dir.join("generated/swift/module.modulemap"),
        "module siftFFI {\n    header \"siftFFI.h\"\n    export *\n}\n",
    )
    .expect("Write modulemap");

    println!("Done! Bindings written to {}", rust_dir.join("generated").display());
}

/// Release library built for this crate. sift is a workspace member, so cargo
/// writes to the workspace's `target/` unless `CARGO_TARGET_DIR` overrides it.
fn library_path(rust_dir: &Path, target_dir: Option<PathBuf>) -> PathBuf {
    let target_dir = target_dir
        .map(|dir| if dir.is_relative() { rust_dir.join(dir) } else { dir })
        .unwrap_or_else(|| rust_dir.parent().unwrap_or(rust_dir).join("target"));
    let file_name = if cfg!(target_os = "macos") {
        "libsift.dylib"
    } else {
        "libsift.so"
    };
    target_dir.join("release").join(file_name)
}

fn run_cmd(program: &str, args: &[&str], dir: &Path) {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap_or_else(|e| panic!("Failed to run {}: {}", program, e));

    if !status.success() {
        panic!("{} failed with status: {}", program, status);
    }
}
