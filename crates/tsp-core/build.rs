//! Build script for tsp-core
//!
//! - Checks the minimum Rust version (Edition 2021 = Rust 1.56.0+)
//! - Resolves the default path of the gdb extension and exposes it to the
//!   crate as `TSP_EXTENSION_PATH`
//!
//! ## Extension path
//!
//! Packagers set `TRACK_SHARED_PTRS_EXTENSION` at build time to the location
//! the extension is installed to. Without it the path points at
//! `track-shared-ptrs.py` in the workspace root, next to the launcher.

use std::env;
use std::path::PathBuf;

const EXTENSION_ENV: &str = "TRACK_SHARED_PTRS_EXTENSION";
const EXTENSION_FILE: &str = "track-shared-ptrs.py";

fn main()
{
    check_rust_version();

    println!("cargo:rerun-if-env-changed={EXTENSION_ENV}");
    println!("cargo:rerun-if-changed=build.rs");

    let extension = match env::var_os(EXTENSION_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => workspace_root().join(EXTENSION_FILE),
    };

    println!("cargo:rustc-env=TSP_EXTENSION_PATH={}", extension.display());
}

fn check_rust_version()
{
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 56, 0);

        assert!(
            rustc_version >= min_rust_version,
            "tsp-core requires Rust {min_rust_version} or newer (Edition 2021), found {rustc_version}"
        );
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }
}

fn workspace_root() -> PathBuf
{
    // crates/tsp-core -> workspace root
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    manifest_dir
        .parent()
        .and_then(|crates| crates.parent())
        .map_or_else(|| manifest_dir.clone(), PathBuf::from)
}
