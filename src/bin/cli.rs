//! Command-line entry point
//!
//! Runs one renaming pass over the selected directory. A missing manifest
//! exits 0; a malformed manifest or any filesystem failure propagates out
//! of `main` with a diagnostic on stderr and a non-zero exit.

use clap::Parser;
use screenshot_renamer::Renamer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "screenshot-renamer",
    version,
    about = "Renames exported test screenshots to clean names from manifest.json"
)]
struct Cli {
    /// Directory containing manifest.json and the exported screenshots
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    Renamer::new(cli.dir).run()?;

    Ok(())
}
