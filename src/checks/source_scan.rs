//! Static verification: no banned literals, auto-detection logic present.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::report::{banner, CheckReport};
use crate::scan::{self, DETECTION_MARKERS, SCANNED_SOURCES};

/// Run the static check suite against the sources under `crate_dir`.
pub fn run(crate_dir: &Path) -> CheckReport {
    let mut report = CheckReport::new();

    banner("Hardcoded path scan");
    report.record("hardcoded path scan", check_sources_clean(crate_dir));

    println!();
    banner("Auto-detection logic check");
    report.record(
        "auto-detection logic check",
        check_detection_markers(crate_dir),
    );

    report
}

fn check_sources_clean(crate_dir: &Path) -> Result<bool> {
    let mut all_clean = true;

    for rel in SCANNED_SOURCES {
        let path = crate_dir.join(rel);
        if !path.exists() {
            println!("⚠️ file missing, skipped: {rel}");
            continue;
        }

        println!();
        println!("Scanning {rel}");
        let file_scan = scan::scan_file(&path)?;
        if file_scan.is_clean() {
            println!("  ✅ no banned path literals");
        } else {
            all_clean = false;
            for hit in &file_scan.hits {
                println!("  ❌ '{}' appears {} time(s)", hit.pattern, hit.count);
            }
        }
        for literal in &file_scan.advisory {
            println!("  ⚠️ drive-rooted path literal: {literal}");
        }
    }

    println!();
    if all_clean {
        println!("✅ all scanned files are free of banned path literals");
    } else {
        println!("❌ banned path literals remain; the hardcoded path is back");
    }
    Ok(all_clean)
}

fn check_detection_markers(crate_dir: &Path) -> Result<bool> {
    let manager_src = crate_dir.join("src/manager.rs");
    let text = fs::read_to_string(&manager_src)
        .with_context(|| format!("reading {}", manager_src.display()))?;

    for (needle, description) in DETECTION_MARKERS {
        if text.contains(needle) {
            println!("✅ found: {description}");
        } else {
            println!("❌ missing: {description}");
        }
    }

    Ok(scan::missing_markers(&text).is_empty())
}
