//! ComfyUI installation root discovery.
//!
//! The extension is unpacked somewhere below `ComfyUI/custom_nodes/`, so the
//! installation root can be recovered by walking ancestor directories until
//! one of them looks like a ComfyUI installation. `COMFYUI_PATH` overrides
//! the search entirely for non-standard layouts.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable that pins the ComfyUI root, skipping auto-detection.
pub const COMFYUI_PATH_ENV: &str = "COMFYUI_PATH";

/// Upper bound on ancestor levels examined during auto-detection.
pub const MAX_SEARCH_DEPTH: usize = 10;

#[derive(Error, Debug)]
pub enum DetectError {
    /// No ancestor within the bound qualified as a ComfyUI installation.
    #[error(
        "ComfyUI root not found within {} parent levels of {}; \
         set COMFYUI_PATH to point at your ComfyUI directory",
        .depth,
        .start.display()
    )]
    RootNotFound { start: PathBuf, depth: usize },

    /// The override points somewhere that is not a ComfyUI installation.
    #[error(
        "COMFYUI_PATH is set to {} but that directory does not look like a \
         ComfyUI installation (no models directory, no application layout)",
        .0.display()
    )]
    OverrideInvalid(PathBuf),

    #[error("failed to resolve the current directory")]
    Io(#[from] std::io::Error),
}

/// Whether a directory qualifies as the ComfyUI installation root.
///
/// A `models` subdirectory is the primary marker. A freshly unpacked
/// installation that has not created `models` yet is still recognized by its
/// application layout: `comfy` and `custom_nodes` side by side.
pub fn is_comfyui_root(dir: &Path) -> bool {
    if dir.join("models").is_dir() {
        return true;
    }
    dir.join("comfy").is_dir() && dir.join("custom_nodes").is_dir()
}

/// Locate the ComfyUI root, honoring the `COMFYUI_PATH` override before
/// falling back to an ancestor search from the current directory.
pub fn find_comfyui_root() -> Result<PathBuf, DetectError> {
    if let Ok(value) = env::var(COMFYUI_PATH_ENV) {
        if !value.trim().is_empty() {
            let root = PathBuf::from(value);
            if is_comfyui_root(&root) {
                info!("📍 Using ComfyUI root from COMFYUI_PATH: {}", root.display());
                return Ok(root);
            }
            return Err(DetectError::OverrideInvalid(root));
        }
    }

    let start = env::current_dir()?;
    find_comfyui_root_from(&start)
}

/// Ancestor search from an explicit starting directory.
///
/// The start directory itself is the first candidate, followed by up to
/// [`MAX_SEARCH_DEPTH`] parents. The first candidate satisfying
/// [`is_comfyui_root`] wins.
pub fn find_comfyui_root_from(start: &Path) -> Result<PathBuf, DetectError> {
    let mut candidate = start;
    for level in 0..=MAX_SEARCH_DEPTH {
        debug!("probing level {}: {}", level, candidate.display());
        if is_comfyui_root(candidate) {
            info!("✅ ComfyUI root detected: {}", candidate.display());
            return Ok(candidate.to_path_buf());
        }
        candidate = match candidate.parent() {
            Some(parent) => parent,
            None => break,
        };
    }

    warn!(
        "no ComfyUI root within {} levels of {}",
        MAX_SEARCH_DEPTH,
        start.display()
    );
    Err(DetectError::RootNotFound {
        start: start.to_path_buf(),
        depth: MAX_SEARCH_DEPTH,
    })
}
