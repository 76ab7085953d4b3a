// Copyright (c) 2026 Sa2VA-DP
// SPDX-License-Identifier: MIT
//! Model path management and self-verification for the ComfyUI Sa2VA
//! custom-node extension.
//!
//! Earlier releases shipped with a hardcoded Windows installation path.
//! This crate replaces it with marker-based auto-detection of the ComfyUI
//! root and carries the verification suites that prove the fix holds.

pub mod checks;
pub mod detection;
pub mod manager;
pub mod scan;
pub mod version;

// Re-export the main types
pub use detection::{find_comfyui_root, find_comfyui_root_from, DetectError, MAX_SEARCH_DEPTH};
pub use manager::Sa2VaModelManager;
pub use scan::{
    banned_literal_hits, scan_file, FileScan, PatternHit, ScanError, BANNED_PATH_VARIANTS,
};
