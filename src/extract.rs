use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use thiserror::Error;

use crate::{
    normalize::remove_line_endings, note::Note, soundfont::locate_block, writer::save_note,
};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Soundfont notes not found")]
    NotFound,
    #[error("No notes found for font '{font_name}'")]
    NoNotes { font_name: String },
    #[error("Error creating font directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of extracting one soundfont
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub font_name: String,
    pub font_dir: PathBuf,
    /// note names that were paired with a data uri
    pub extracted: usize,
    pub saved: usize,
    pub failed: usize,
}

/// Extracts all notes of the soundfont in `path` into a directory named after
/// the font, next to the source file.
pub fn extract_file(path: &Path) -> Result<ExtractionSummary, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_owned(),
        source,
    })?;
    let font_root = path.parent().unwrap_or_else(|| Path::new(""));
    extract_text(&text, font_root)
}

/// Same as [`extract_file`] for already loaded text, the font directory is
/// created inside `font_root`.
pub fn extract_text(text: &str, font_root: &Path) -> Result<ExtractionSummary, ExtractError> {
    let text = remove_line_endings(text);
    let block = locate_block(&text).ok_or(ExtractError::NotFound)?;
    let pairs = block.note_pairs();
    if pairs.is_empty() {
        return Err(ExtractError::NoNotes {
            font_name: block.font_name.to_string(),
        });
    }
    let font_dir = font_root.join(block.font_name);
    fs::create_dir_all(&font_dir).map_err(|source| ExtractError::CreateDir {
        path: font_dir.clone(),
        source,
    })?;
    let mut summary = ExtractionSummary {
        font_name: block.font_name.to_string(),
        font_dir,
        extracted: pairs.len(),
        saved: 0,
        failed: 0,
    };
    for pair in pairs {
        let note = match Note::decode(pair.name, pair.data_uri) {
            Ok(note) => note,
            Err(e) => {
                error!("{e}");
                summary.failed += 1;
                continue;
            }
        };
        match save_note(&summary.font_dir, &note) {
            Ok(saved_path) => {
                debug!("saved {saved_path:?}");
                summary.saved += 1;
            }
            Err(e) => {
                error!("{e}");
                summary.failed += 1;
            }
        }
    }
    info!(
        "Successfully extracted {} of {} notes for font '{}'",
        summary.saved, summary.extracted, summary.font_name
    );
    Ok(summary)
}
