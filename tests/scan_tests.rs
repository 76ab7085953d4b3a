use std::fs;
use std::path::Path;

use comfyui_sa2va::scan::{
    banned_literal_hits, count_occurrences, drive_path_literals, missing_markers, scan_file,
    DETECTION_MARKERS,
};
use tempfile::TempDir;

#[test]
fn counts_non_overlapping_occurrences() {
    assert_eq!(count_occurrences("abab ab", "ab"), 3);
    assert_eq!(count_occurrences("", "ab"), 0);
}

#[test]
fn clean_source_has_no_hits() {
    let text = "let root = find_comfyui_root()?;\nlet dir = root.join(\"models/sa2va\");\n";
    assert!(banned_literal_hits(text).is_empty());
}

#[test]
fn fixture_with_retired_path_is_counted_per_pattern() {
    // mimics the pre-rework manager source, with the path both in a string
    // literal (escaped backslashes) and in a comment (forward slashes)
    let fixture = concat!(
        "let default_root = \"E:/Comfyui_test/ComfyUI\";\n",
        "// fallback used to be E:/Comfyui_test\n",
        "let windows_style = \"E:\\\\Comfyui_test\\\\ComfyUI\";\n",
    );

    let hits = banned_literal_hits(fixture);
    assert_eq!(hits.len(), 2);

    let forward = hits.iter().find(|h| h.pattern == "E:/Comfyui_test").unwrap();
    assert_eq!(forward.count, 2);

    let escaped = hits
        .iter()
        .find(|h| h.pattern == "E:\\\\Comfyui_test")
        .unwrap();
    assert_eq!(escaped.count, 1);
}

#[test]
fn raw_backslash_variant_is_detected() {
    let fixture = "# old default: E:\\Comfyui_test\\ComfyUI\n";
    let hits = banned_literal_hits(fixture);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pattern, "E:\\Comfyui_test");
    assert_eq!(hits[0].count, 1);
}

#[test]
fn scan_file_reads_and_reports() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manager_v1.rs");
    fs::write(&path, "let root = \"E:/Comfyui_test/ComfyUI\";\n").unwrap();

    let result = scan_file(&path).unwrap();
    assert!(!result.is_clean());
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].pattern, "E:/Comfyui_test");
    assert_eq!(result.hits[0].count, 1);
}

#[test]
fn scan_file_missing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no_such_file.rs");
    assert!(scan_file(&missing).is_err());
}

#[test]
fn advisory_flags_other_drive_paths() {
    let text = "let tools = \"D:/tools/ffmpeg.exe\";\n";
    let found = drive_path_literals(text);
    assert_eq!(found, vec!["D:/tools/ffmpeg.exe".to_string()]);
}

#[test]
fn advisory_skips_the_banned_fixture_itself() {
    let text = "// E:/Comfyui_test/ComfyUI\n";
    assert!(drive_path_literals(text).is_empty());
}

#[test]
fn markers_all_present_in_current_manager_source() {
    let manager_src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/manager.rs");
    let text = fs::read_to_string(manager_src).unwrap();
    assert!(missing_markers(&text).is_empty());
}

#[test]
fn markers_missing_from_prior_version_source() {
    let text = "pub struct Sa2VaModelManager { root: PathBuf }\n";
    let missing = missing_markers(text);
    assert_eq!(missing.len(), DETECTION_MARKERS.len());
}
