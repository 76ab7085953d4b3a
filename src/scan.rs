//! Static source scanning for the retired hardcoded installation path.
//!
//! The banned set is a point-in-time regression fixture for the one path
//! value that older releases shipped hardcoded, not a general detector.
//! [`drive_path_literals`] covers the general case as an advisory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Spelling and escaping variants under which the retired `E:/Comfyui_test`
/// path can appear in source text: forward slashes, a raw backslash (as in a
/// comment), the doubled backslash of a string literal, and lowercased.
pub const BANNED_PATH_VARIANTS: &[&str] = &[
    "E:/Comfyui_test",
    "E:\\Comfyui_test",
    "E:\\\\Comfyui_test",
    "e:/comfyui_test",
];

/// Source files the verification suites scan, relative to the crate root.
pub const SCANNED_SOURCES: &[&str] = &["src/manager.rs", "src/detection.rs", "src/lib.rs"];

/// Substrings whose presence in the manager source proves the auto-detection
/// rework is in place.
pub const DETECTION_MARKERS: &[(&str, &str)] = &[
    ("find_comfyui_root", "root auto-detection entry point"),
    ("Option<PathBuf>", "optional root parameter"),
    ("strip_prefix", "relative path rendering"),
    ("ComfyUI/", "privacy display prefix"),
];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Occurrence count for one banned pattern.
#[derive(Debug, Clone)]
pub struct PatternHit {
    pub pattern: &'static str,
    pub count: usize,
}

/// Scan result for a single source file.
#[derive(Debug)]
pub struct FileScan {
    pub file: PathBuf,
    /// Banned patterns found in the file, zero-count entries omitted.
    pub hits: Vec<PatternHit>,
    /// Drive-rooted path literals outside the banned fixture set.
    pub advisory: Vec<String>,
}

impl FileScan {
    pub fn is_clean(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Non-overlapping occurrence count of a literal pattern.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    text.matches(pattern).count()
}

/// Count every banned variant in the given source text.
pub fn banned_literal_hits(text: &str) -> Vec<PatternHit> {
    BANNED_PATH_VARIANTS
        .iter()
        .copied()
        .map(|pattern| PatternHit {
            pattern,
            count: count_occurrences(text, pattern),
        })
        .filter(|hit| hit.count > 0)
        .collect()
}

fn drive_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]:[/\\][\w.\-/\\]+").expect("drive path regex"))
}

/// Drive-rooted path literals other than the known banned fixture set, which
/// [`banned_literal_hits`] already accounts for.
pub fn drive_path_literals(text: &str) -> Vec<String> {
    drive_path_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|literal| !literal.to_ascii_lowercase().contains("comfyui_test"))
        .collect()
}

/// Markers absent from the given source text.
pub fn missing_markers(text: &str) -> Vec<(&'static str, &'static str)> {
    DETECTION_MARKERS
        .iter()
        .copied()
        .filter(|(needle, _)| !text.contains(needle))
        .collect()
}

/// Read and scan one source file.
pub fn scan_file(path: &Path) -> Result<FileScan, ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileScan {
        file: path.to_path_buf(),
        hits: banned_literal_hits(&text),
        advisory: drive_path_literals(&text),
    })
}
