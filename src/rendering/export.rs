//! PNG export of rendered frames.

use std::path::{Path, PathBuf};

use chrono::Local;
use tiny_skia::Pixmap;

use crate::utils::errors::SimError;

/// Directory name for a new run: `windmill_YYYYMMDD_HHMMSS`
pub fn run_directory_name() -> String {
    format!("windmill_{}", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Straight (non-premultiplied) RGBA bytes of the pixmap.
pub fn rgba_bytes(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

/// Save `pixmap` as `frame_NNNNNN.png` inside `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn save_frame(pixmap: &Pixmap, dir: &Path, index: u64) -> Result<PathBuf, SimError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(format!("frame_{:06}.png", index));
    image::save_buffer(
        &path,
        &rgba_bytes(pixmap),
        pixmap.width(),
        pixmap.height(),
        image::ColorType::Rgba8,
    )?;

    log::debug!("Frame saved: {}", path.display());
    Ok(path)
}
