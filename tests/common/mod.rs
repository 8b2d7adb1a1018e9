#![allow(dead_code)]

use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// A tree of files without capture dates, some of them already in the bucket.
pub fn setup_undated_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("vacation/spain/notes.txt").write_str("notes").unwrap();
    temp_dir.child("todo.txt").write_str("todo").unwrap();
    temp_dir.child("no_date/readme.txt").write_str("readme").unwrap();
    temp_dir
}

/// All files under `root`, relative and sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = photodate::photodate_core::walk_files(root)
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Tests driving the real binary need the exiftool executable.
pub fn require_exiftool() -> bool {
    let available = photodate::photodate_core::exiftool_available();
    if !available {
        eprintln!("exiftool not found, skipping");
    }
    available
}
