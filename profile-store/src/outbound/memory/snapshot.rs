//! JSON snapshot files for the in-memory profile source.
//!
//! A snapshot is one JSON object mapping uid to profile document. Writes go
//! to a hidden temporary file in the same directory which is then renamed
//! over the target, so readers never see a partially written snapshot.
//!
//! The write helpers are the temp-file-and-rename writer from the
//! example-data seed registry, reporting through [`SnapshotError`].

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use thiserror::Error;

use super::Documents;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Errors raised while reading or writing a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot path does not name a file.
    #[error("snapshot path '{path}' must name a file")]
    NotAFile {
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The directory holding the snapshot could not be opened.
    #[error("failed to open snapshot directory '{path}': {message}")]
    OpenDirectory {
        /// Directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The snapshot file could not be read.
    #[error("failed to read snapshot '{path}': {message}")]
    Read {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The snapshot file is not a JSON object of documents.
    #[error("invalid snapshot JSON in '{path}': {message}")]
    Parse {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Description of the parse error.
        message: String,
    },
    /// The snapshot file could not be written.
    #[error("failed to write snapshot '{path}': {message}")]
    Write {
        /// Path being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Location of a snapshot file: its parent directory handle and file name.
#[derive(Debug)]
pub struct SnapshotLocation {
    dir: Dir,
    file_name: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl SnapshotLocation {
    /// Open the directory containing `path` with ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NotAFile`] when `path` has no file name and
    /// [`SnapshotError::OpenDirectory`] when the parent cannot be opened.
    pub fn open(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let file_name = path.file_name().ok_or_else(|| SnapshotError::NotAFile {
            path: path.to_path_buf(),
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            SnapshotError::OpenDirectory {
                path: parent.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Ok(Self::within(dir, Utf8Path::new(file_name)).with_display_path(path))
    }

    /// Address `file_name` inside an already opened directory.
    #[must_use]
    pub fn within(dir: Dir, file_name: &Utf8Path) -> Self {
        Self {
            dir,
            file_name: file_name.to_path_buf(),
            path: file_name.to_path_buf(),
        }
    }

    fn with_display_path(mut self, path: &Utf8Path) -> Self {
        self.path = path.to_path_buf();
        self
    }

    /// Path used in error messages.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read the snapshot; a missing file yields no documents.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Read`] or [`SnapshotError::Parse`].
    pub fn load(&self) -> Result<Documents, SnapshotError> {
        let raw = match self.dir.read_to_string(self.file_name.as_std_path()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Documents::new()),
            Err(err) => {
                return Err(SnapshotError::Read {
                    path: self.path.clone(),
                    message: err.to_string(),
                });
            }
        };
        serde_json::from_str(&raw).map_err(|err| SnapshotError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// Replace the snapshot with `documents`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Write`] when serialisation or any file
    /// operation fails.
    pub fn store(&self, documents: &Documents) -> Result<(), SnapshotError> {
        let contents =
            serde_json::to_string_pretty(documents).map_err(|err| SnapshotError::Write {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        write_atomic(&self.dir, &self.file_name, &contents).map_err(|message| {
            SnapshotError::Write {
                path: self.path.clone(),
                message,
            }
        })
    }
}

fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), String> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err("snapshot path must be a file".to_owned());
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_temp_file(dir, &tmp_name, contents)?;
    if let Err(err) = rename_over(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(err.to_string());
    }
    // Best-effort directory sync.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> Result<(), String> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| err.to_string())?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(err.to_string());
    }
    Ok(())
}

#[cfg(windows)]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}
