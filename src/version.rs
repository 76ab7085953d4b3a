// Version information for the ComfyUI Sa2VA extension

/// Full version string with feature description
pub const VERSION: &str = "v0.2.0-auto-root-detection-2026-08-05";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.2.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-05";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "auto-root-detection",
    "env-override",
    "relative-path-display",
    "banned-literal-scan",
];

/// Breaking changes from previous version
pub const BREAKING_CHANGES: &[&str] = &[
    "The hardcoded E-drive installation path is gone; non-standard layouts must set COMFYUI_PATH",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("ComfyUI-Sa2VA {} ({})", VERSION_NUMBER, BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(FEATURES.contains(&"auto-root-detection"));
        assert!(FEATURES.contains(&"banned-literal-scan"));
        assert!(!BREAKING_CHANGES.is_empty());
    }

    #[test]
    fn test_version_string() {
        let version = get_version_string();
        assert!(version.contains(VERSION_NUMBER));
        assert!(version.contains(BUILD_DATE));
    }
}
