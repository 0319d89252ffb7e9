use std::path::PathBuf;

use crate::error::{AsciiError, Result};

/// Configuration for ASCII art conversion
///
/// The defaults are the values the command-line tool always runs with.
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Resizing
    pub max_size: u32,              // bounding box side, default 164
    pub row_step: u32,              // vertical sampling stride, default 2

    /// Background replacement
    pub white_threshold: f64,       // radius is 255 - threshold, default 240.0
    pub background_gray: [u8; 3],   // RGB, default [128, 128, 128]

    /// Rendering
    pub cell_width: u32,            // glyph cell width, default 7
    pub cell_height: u32,           // glyph cell height, default 13
    pub font_scale: f32,            // glyph pixel scale, default 13.0
    pub ink_color: [u8; 3],         // RGB, default black [0, 0, 0]
    pub paper_color: [u8; 3],       // RGB, default white [255, 255, 255]

    /// Output
    pub output_dir: PathBuf,        // default "output"
    pub output_prefix: String,      // default "ascii-"
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            // Resizing
            max_size: 164,
            row_step: 2,

            // Background replacement
            white_threshold: 240.0,
            background_gray: [128, 128, 128],

            // Rendering
            cell_width: 7,
            cell_height: 13,
            font_scale: 13.0,
            ink_color: [0, 0, 0],
            paper_color: [255, 255, 255],

            // Output
            output_dir: PathBuf::from("output"),
            output_prefix: "ascii-".to_string(),
        }
    }
}

impl AsciiConfig {
    /// Radius around pure white inside which a pixel counts as background
    pub fn background_radius(&self) -> f64 {
        255.0 - self.white_threshold
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(AsciiError::InvalidConfig(
                "max_size must be greater than 0".to_string(),
            ));
        }
        if self.row_step == 0 {
            return Err(AsciiError::InvalidConfig(
                "row_step must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=255.0).contains(&self.white_threshold) {
            return Err(AsciiError::InvalidConfig(format!(
                "white_threshold must be between 0 and 255, got {}",
                self.white_threshold
            )));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(AsciiError::InvalidConfig(format!(
                "glyph cell must be non-empty, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.font_scale <= 0.0 {
            return Err(AsciiError::InvalidConfig(format!(
                "font_scale must be positive, got {}",
                self.font_scale
            )));
        }
        Ok(())
    }
}
