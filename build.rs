//! Build script for the podcast digest CLI.
//!
//! Copies the `.env.example` template into the user's local data directory so
//! that the configuration template sits next to the `.env` file the binary
//! loads at start-up.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<data_local_dir>/podigest/`.
///
/// A missing template only produces a cargo warning. Failing to create the
/// target directory or to write the file aborts the build.
///
/// # Destination
///
/// - Linux: `~/.local/share/podigest/.env.example`
/// - macOS: `~/Library/Application Support/podigest/.env.example`
/// - Windows: `%LOCALAPPDATA%/podigest/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("podigest");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
