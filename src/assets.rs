//! Sprite files on disk.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::FrameArt;

/// Read and parse one sprite file.
pub fn load_frame_file(path: &Path) -> Result<FrameArt> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read sprite {}", path.display()))?;
    let art = FrameArt::load_named(&path.display().to_string(), &text)?;
    Ok(art)
}

/// Load `files` from `dir`, in order. Any missing or malformed file is fatal.
pub fn load_frames(dir: &Path, files: &[&str]) -> Result<Vec<Rc<FrameArt>>> {
    files
        .iter()
        .map(|name| -> Result<Rc<FrameArt>> {
            let path = dir.join(name);
            let art = load_frame_file(&path)?;
            let (rows, columns) = art.size();
            info!(path = %path.display(), rows, columns, "loaded sprite frame");
            Ok(Rc::new(art))
        })
        .collect()
}
