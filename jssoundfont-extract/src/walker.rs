use std::{
    fs,
    path::{Path, PathBuf},
};

use jssoundfont::{extract_file, ExtractError};
use log::{error, info};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    /// regular files handed to the extractor
    pub files_seen: usize,
    pub files_extracted: usize,
    pub notes_saved: usize,
    /// skipped files, skipped notes and bad arguments
    pub errors: usize,
}

pub fn process_paths(paths: &[PathBuf]) -> WalkSummary {
    let mut summary = WalkSummary::default();
    for path in paths {
        process_path(path, &mut summary);
    }
    summary
}

pub fn process_path(path: &Path, summary: &mut WalkSummary) {
    if path.is_file() {
        process_file(path, summary);
    } else if path.is_dir() {
        process_dir(path, summary);
    } else {
        error!("File or directory {path:?} not found");
        summary.errors += 1;
    }
}

/// only processes the files directly inside `dir`, subdirectories are skipped
pub fn process_dir(dir: &Path, summary: &mut WalkSummary) {
    info!("Processing all files in directory {dir:?}");
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error reading directory {dir:?}: {e}");
            summary.errors += 1;
            return;
        }
    };
    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() {
                    process_file(&path, summary);
                }
            }
            Err(e) => {
                error!("Error reading entry of directory {dir:?}: {e}");
                summary.errors += 1;
            }
        }
    }
}

fn process_file(path: &Path, summary: &mut WalkSummary) {
    info!("Processing {path:?}");
    summary.files_seen += 1;
    match extract_file(path) {
        Ok(extraction) => {
            summary.files_extracted += 1;
            summary.notes_saved += extraction.saved;
            summary.errors += extraction.failed;
        }
        Err(e @ (ExtractError::NotFound | ExtractError::NoNotes { .. })) => {
            error!("{e} in file {path:?}");
            summary.errors += 1;
        }
        Err(e) => {
            error!("Failed to process file {path:?}: {e}");
            summary.errors += 1;
        }
    }
}
