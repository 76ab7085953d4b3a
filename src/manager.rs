// Copyright (c) 2026 Sa2VA-DP
// SPDX-License-Identifier: MIT
//! Sa2VA model storage inside a ComfyUI installation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::detection::find_comfyui_root;

/// Fixed location of Sa2VA model weights below the ComfyUI root.
pub const MODELS_SUBDIR: &str = "models/sa2va";

/// Manages where Sa2VA model weights live inside a ComfyUI installation.
///
/// The root is resolved once at construction time, either from an explicit
/// path or by auto-detection, and the models directory is created eagerly so
/// every later lookup is pure path arithmetic.
pub struct Sa2VaModelManager {
    comfyui_path: PathBuf,
    models_dir: PathBuf,
}

impl Sa2VaModelManager {
    /// Create a manager, auto-detecting the ComfyUI root when no explicit
    /// path is given.
    pub fn new(comfyui_path: Option<PathBuf>) -> Result<Self> {
        let comfyui_path = match comfyui_path {
            Some(path) => path,
            None => find_comfyui_root()?,
        };

        let models_dir = comfyui_path.join(MODELS_SUBDIR);
        fs::create_dir_all(&models_dir).with_context(|| {
            format!("failed to create models directory {}", models_dir.display())
        })?;
        info!("📁 Sa2VA models directory: {}", models_dir.display());

        Ok(Self {
            comfyui_path,
            models_dir,
        })
    }

    pub fn comfyui_path(&self) -> &Path {
        &self.comfyui_path
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Expected on-disk location for a model identifier such as
    /// `ByteDance/Sa2VA-Qwen3-VL-4B`. Pure path arithmetic, no I/O.
    pub fn get_model_path(&self, model: &str) -> PathBuf {
        self.models_dir.join(model)
    }

    /// Whether the model's weights are already on disk.
    pub fn is_model_present(&self, model: &str) -> bool {
        self.get_model_path(model).exists()
    }

    /// Model identifiers (`org/name`) currently present under the models
    /// directory, sorted.
    pub fn list_local_models(&self) -> Result<Vec<String>> {
        let mut models = Vec::new();
        let entries = fs::read_dir(&self.models_dir).with_context(|| {
            format!("failed to read models directory {}", self.models_dir.display())
        })?;

        for org_entry in entries {
            let org_entry = org_entry?;
            if !org_entry.file_type()?.is_dir() {
                continue;
            }
            let org = org_entry.file_name().to_string_lossy().into_owned();
            for model_entry in fs::read_dir(org_entry.path())? {
                let model_entry = model_entry?;
                if !model_entry.file_type()?.is_dir() {
                    continue;
                }
                let name = model_entry.file_name().to_string_lossy().into_owned();
                models.push(format!("{org}/{name}"));
            }
        }

        models.sort();
        debug!("🔎 {} local Sa2VA models", models.len());
        Ok(models)
    }

    /// Render a path for user-facing output without exposing the user's
    /// absolute installation path.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.comfyui_path) {
            Ok(rel) => format!("ComfyUI/{}", rel.display()),
            Err(_) => path.display().to_string(),
        }
    }
}
