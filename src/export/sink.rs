//! Delivery targets for finished export artifacts.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Suffixed candidates tried before giving up on a free name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Receives the encoded bytes of an export under their final file name.
pub trait DownloadSink {
    /// Returns the written path, or `None` when the user cancelled.
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>>;
}

/// Writes every artifact into one directory, creating it on demand.
///
/// Only the final component of the requested name is used, so a name can
/// never point outside the directory. Existing files are kept: a taken
/// name gets a ` (n)` suffix before its extension.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        let name = Path::new(file_name).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{file_name:?} does not name a file"),
            )
        })?;
        fs::create_dir_all(&self.dir)?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(numbered(name, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(bytes)?;
                    info!(path = %path.display(), bytes = bytes.len(), "export written");
                    return Ok(Some(path));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "name taken");
                }
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free name for {file_name:?} in {}", self.dir.display()),
        ))
    }
}

/// `report.png` for attempt 0, then `report (1).png`, `report (2).png`, ...
fn numbered(name: &OsStr, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return PathBuf::from(name);
    }
    let path = Path::new(name);
    let stem = path.file_stem().unwrap_or(name).to_string_lossy();
    match path.extension() {
        Some(ext) => PathBuf::from(format!("{stem} ({attempt}).{}", ext.to_string_lossy())),
        None => PathBuf::from(format!("{stem} ({attempt})")),
    }
}

/// Asks where to save through the native save dialog.
#[derive(Debug, Clone)]
pub struct DialogSink {
    start_dir: PathBuf,
}

impl DialogSink {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
        }
    }
}

impl DownloadSink for DialogSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        let mut dialog = rfd::FileDialog::new().set_file_name(file_name);
        if self.start_dir.is_dir() {
            dialog = dialog.set_directory(&self.start_dir);
        }
        if let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) {
            dialog = dialog.add_filter(ext.to_uppercase(), &[ext]);
        }

        let Some(path) = dialog.save_file() else {
            debug!(file_name, "save dialog cancelled");
            return Ok(None);
        };
        fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "export written");
        Ok(Some(path))
    }
}
