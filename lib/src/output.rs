//! Output naming and PNG writing

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::config::AsciiConfig;
use crate::error::{AsciiError, Result};

/// Preferred output path for an input file: `<output_dir>/<prefix><file name>`
pub fn output_path_for(input: &Path, config: &AsciiConfig) -> PathBuf {
    let base = input.file_name().unwrap_or(input.as_os_str());
    let mut name = OsString::from(&config.output_prefix);
    name.push(base);
    config.output_dir.join(name)
}

/// First path that does not exist yet, starting from `base`
///
/// If `base` exists, `-1`, `-2`, ... is inserted before the extension until
/// an unused name is found. The probe is not atomic; another process could
/// create the file between the check and the write.
pub fn available_output_path(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let dir = base.parent().unwrap_or_else(|| Path::new(""));
    let stem = base.file_stem().unwrap_or_default();
    let ext = base.extension();

    (1u64..)
        .map(|i| {
            let mut name = stem.to_os_string();
            name.push(format!("-{}", i));
            if let Some(ext) = ext {
                name.push(".");
                name.push(ext);
            }
            dir.join(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| base.to_path_buf())
}

/// Write an image as PNG, whatever extension `path` carries
///
/// The parent directory is created if missing.
///
/// # Errors
/// `AsciiError::Io` if the directory or file cannot be created or flushed,
/// `AsciiError::Encode` if PNG encoding fails.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let io_err = |source| AsciiError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| AsciiError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| AsciiError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(io_err)?;
    Ok(())
}
