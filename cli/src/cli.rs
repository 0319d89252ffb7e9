use std::path::PathBuf;

use clap::Parser;

/// Convert an image (PNG, JPEG, GIF) into an ASCII-art PNG under output/.
#[derive(Parser, Debug)]
#[command(name = "img2ascii", version, about, long_about = None)]
pub struct Cli {
    /// Path to the source image.
    pub image: PathBuf,
}
