//! img2ascii - image to ASCII art converter
//!
//! Loads an image, turns near-white background into gray, fits it into a
//! 164x164 box, maps each pixel's brightness to a character and draws the
//! characters back into a PNG with a fixed-size monospace font.
//!
//! # Example
//! ```no_run
//! use img2ascii::{convert_file, AsciiConfig};
//! use std::path::Path;
//!
//! let config = AsciiConfig::default();
//! let written = convert_file(Path::new("photo.jpg"), &config).unwrap();
//! println!("saved to {}", written.display());
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod lut;
pub mod output;
pub mod processor;
pub mod render;

// Re-export main types for convenience
pub use ascii::CharacterGrid;
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use processor::{convert_file, process_image};
