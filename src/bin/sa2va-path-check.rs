// Copyright (c) 2026 Sa2VA-DP
// SPDX-License-Identifier: MIT
use std::path::PathBuf;

use clap::Parser;
use comfyui_sa2va::checks::path_fix;
use comfyui_sa2va::version;

/// Live self-check for the Sa2VA path rework: root auto-detection, manager
/// initialization, relative path display, and a scan of the manager sources.
#[derive(Parser, Debug)]
#[command(name = "sa2va-path-check")]
#[command(version)]
#[command(about = "Verify Sa2VA model path resolution against a live ComfyUI installation", long_about = None)]
struct Args {
    /// Explicit ComfyUI root; skips auto-detection
    #[arg(long, env = "COMFYUI_PATH")]
    root: Option<PathBuf>,

    /// Crate directory whose sources are scanned
    #[arg(long, env = "SA2VA_CRATE_DIR")]
    crate_dir: Option<PathBuf>,
}

fn main() {
    dotenv::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let crate_dir = args
        .crate_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    println!("\n{}", "🔍".repeat(30));
    println!("Sa2VA path fix verification");
    println!("📦 {}", version::get_version_string());
    println!("{}\n", "🔍".repeat(30));

    let report = path_fix::run(args.root.as_deref(), &crate_dir);
    report.print_summary();

    if report.all_passed() {
        println!("\n🎉 All checks passed! Root auto-detection is working.");
    } else {
        println!("\n⚠️ {} check(s) failed, see details above", report.failed());
    }

    std::process::exit(report.exit_code());
}
