use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::EXPORT_FILE_PREFIX;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        debug!("Directory {:?} does not exist, creating...", path);
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// `Links_Growth_<HHMM>.csv`
pub fn export_filename(stamp: &str) -> String {
    format!("{}{}.csv", EXPORT_FILE_PREFIX, stamp)
}

/// Writes the export into `output_dir` and returns the final path. When the
/// file already exists and `overwrite` is off, a numeric suffix is added.
pub fn write_export(
    output_dir: &Path,
    stamp: &str,
    bytes: &[u8],
    overwrite: bool,
) -> Result<PathBuf> {
    ensure_dir_exists(output_dir)?;

    let mut file_path = output_dir.join(export_filename(stamp));

    if file_path.exists() {
        debug!("Export file already exists: {:?}", file_path);
        if overwrite {
            warn!("Overwriting existing file: {}", file_path.display());
        } else {
            let mut suffix = 1;
            loop {
                file_path =
                    output_dir.join(format!("{}{}_{}.csv", EXPORT_FILE_PREFIX, stamp, suffix));
                if !file_path.exists() {
                    break;
                }
                suffix += 1;
            }
            info!("File exists. Using: {}", file_path.display());
        }
    }

    debug!(
        "Writing {} bytes to file: {}",
        bytes.len(),
        file_path.display()
    );
    fs::write(&file_path, bytes)
        .with_context(|| format!("Failed to write export file {}", file_path.display()))?;
    Ok(file_path)
}
