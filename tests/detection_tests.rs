use std::fs;

use comfyui_sa2va::detection::{find_comfyui_root_from, DetectError, MAX_SEARCH_DEPTH};
use tempfile::TempDir;

fn comfyui_tree() -> TempDir {
    let tree = TempDir::new().unwrap();
    fs::create_dir_all(tree.path().join("models")).unwrap();
    fs::create_dir_all(tree.path().join("custom_nodes/ComfyUI-Sa2VA-DP")).unwrap();
    tree
}

#[test]
fn finds_root_from_nested_extension_dir() {
    let tree = comfyui_tree();
    let start = tree.path().join("custom_nodes/ComfyUI-Sa2VA-DP");

    let root = find_comfyui_root_from(&start).unwrap();
    assert_eq!(root, tree.path());
    assert!(root.join("models").is_dir());
}

#[test]
fn accepts_the_root_itself() {
    let tree = comfyui_tree();
    let root = find_comfyui_root_from(tree.path()).unwrap();
    assert_eq!(root, tree.path());
}

#[test]
fn recognizes_application_layout_without_models() {
    let tree = TempDir::new().unwrap();
    fs::create_dir_all(tree.path().join("comfy")).unwrap();
    fs::create_dir_all(tree.path().join("custom_nodes/ComfyUI-Sa2VA-DP")).unwrap();

    let start = tree.path().join("custom_nodes/ComfyUI-Sa2VA-DP");
    assert_eq!(find_comfyui_root_from(&start).unwrap(), tree.path());
}

#[test]
fn custom_nodes_alone_is_not_a_marker() {
    let tree = TempDir::new().unwrap();
    let start = tree.path().join("custom_nodes/ComfyUI-Sa2VA-DP");
    fs::create_dir_all(&start).unwrap();

    let err = find_comfyui_root_from(&start).unwrap_err();
    assert!(matches!(err, DetectError::RootNotFound { .. }));
}

#[test]
fn finds_root_at_the_depth_bound() {
    let tree = comfyui_tree();
    let mut deep = tree.path().to_path_buf();
    for level in 0..MAX_SEARCH_DEPTH {
        deep = deep.join(format!("level{level}"));
    }
    fs::create_dir_all(&deep).unwrap();

    assert_eq!(find_comfyui_root_from(&deep).unwrap(), tree.path());
}

#[test]
fn gives_up_beyond_the_depth_bound() {
    let tree = comfyui_tree();
    let mut deep = tree.path().to_path_buf();
    for level in 0..=MAX_SEARCH_DEPTH {
        deep = deep.join(format!("level{level}"));
    }
    fs::create_dir_all(&deep).unwrap();

    let err = find_comfyui_root_from(&deep).unwrap_err();
    match err {
        DetectError::RootNotFound { start, depth } => {
            assert_eq!(start, deep);
            assert_eq!(depth, MAX_SEARCH_DEPTH);
        }
        other => panic!("expected RootNotFound, got {other}"),
    }
}
