//! Recursive JSON corpus loader.
//!
//! Each `*.json` file under the configured directories is expected to hold a
//! JSON list of work records. Files that cannot be parsed are skipped with a
//! warning; files holding anything other than a list are skipped quietly.
//! Directories are walked in sorted order so runs are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde_json::Value;

use crate::corpus::work::Work;
use crate::error::{Result, YixiangError};

/// Load every work record from a single JSON file.
///
/// A payload that is not a list yields no works. Entries that are not
/// objects are skipped.
pub fn load_works_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Work>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| {
        YixiangError::corpus(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    match value {
        Value::Array(items) => Ok(items.iter().filter_map(Work::from_value).collect()),
        _ => {
            debug!("{} does not hold a list of works, skipping", path.display());
            Ok(Vec::new())
        }
    }
}

/// Load works from all JSON files found recursively under the directories.
///
/// Missing directories and unreadable files are reported and skipped; this
/// function never fails.
pub fn load_works_from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Vec<Work> {
    let mut works = Vec::new();
    let mut files_found = 0;

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            warn!("Corpus directory {} does not exist or is not a directory, skipping", dir.display());
            continue;
        }

        let mut files = Vec::new();
        collect_json_files(dir, &mut files);
        files.sort();

        for file in files {
            files_found += 1;
            match load_works_from_file(&file) {
                Ok(loaded) => {
                    debug!("Loaded {} works from {}", loaded.len(), file.display());
                    works.extend(loaded);
                }
                Err(e) => warn!("Skipping {}: {}", file.display(), e),
            }
        }
    }

    info!("Found {} JSON files, loaded {} works", files_found, works.len());
    works
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        // `file_type` does not follow symlinks: linked directories are not walked.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            collect_json_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
            files.push(path);
        }
    }
}
