//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const WHEEL: &str = "pkg-0.1.0-cp311-cp311-linux_x86_64.whl";

/// Config whose tools only append to order.log; the packager also writes a
/// wheel and an sdist into dist/
pub const FAKE_TOOLS: &str = r#"
module: pkg
tools:
  compile: "echo compile:${module} >> order.log"
  stubgen: "echo stubgen:${module} >> order.log"
  package: "echo package >> order.log && mkdir -p dist && printf wheel-bytes > dist/pkg-0.1.0-cp311-cp311-linux_x86_64.whl && printf sdist > dist/pkg-0.1.0.tar.gz"
"#;

/// Create a temporary project directory with a binwheel.yml file
pub fn create_project(content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("binwheel.yml"), content).unwrap();
    temp_dir
}

/// Lines the fake tools appended to order.log, or nothing if none ran
pub fn read_log(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("order.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Sorted file names directly inside a directory
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
