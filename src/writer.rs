use std::{
    fs::{create_dir_all, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::note::Note;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Cannot save note {name} due to missing data or format")]
    MissingData { name: String },
    #[error("Error saving file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// writes the note to `<dir>/<name>.<format>`, creating `dir` if needed and
/// overwriting an existing file
pub fn save_note(dir: &Path, note: &Note) -> Result<PathBuf, SaveError> {
    if note.format.is_empty() || note.data.is_empty() {
        return Err(SaveError::MissingData {
            name: note.name.clone(),
        });
    }
    create_dir_all(dir).map_err(|source| SaveError::Io {
        path: dir.to_owned(),
        source,
    })?;
    let path = dir.join(note.file_name());
    let write_file = || -> io::Result<()> {
        let mut f = BufWriter::new(File::create(&path)?);
        f.write_all(&note.data)?;
        f.flush()
    };
    match write_file() {
        Ok(()) => Ok(path),
        Err(source) => Err(SaveError::Io { path, source }),
    }
}
