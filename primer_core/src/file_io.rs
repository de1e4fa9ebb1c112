//! # File I/O Module
//!
//! Writes the temperature log with a few safety features:
//! - **Open first**: the output file is opened before anything is written,
//!   so an unwritable path fails with no partial output
//! - **File locking**: an exclusive OS-level lock (via fs2) is held while
//!   writing, so two loggers cannot interleave into one file
//! - **Sync**: contents are flushed to disk before the lock is released
//!
//! ## Example
//!
//! ```rust,no_run
//! use primer_core::file_io::write_log;
//! use std::path::Path;
//!
//! write_log(Path::new("temps.txt"), "Sample #1: ...\n")?;
//! # Ok::<(), primer_core::errors::PrimerError>(())
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::errors::{PrimerError, PrimerResult};

/// Open `path` for writing without truncating it yet.
///
/// Truncation waits until the lock is held so a locked file is left intact.
pub fn open_output(path: &Path) -> PrimerResult<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| PrimerError::file_error("open", path.display().to_string(), e.to_string()))
}

/// Write `contents` to `path`, replacing whatever was there.
///
/// # Returns
///
/// * `Ok(())` - File written and synced
/// * `Err(PrimerError::FileError)` - Open or write failed (`operation` says which)
/// * `Err(PrimerError::FileLocked)` - Another process is writing the file
pub fn write_log(path: &Path, contents: &str) -> PrimerResult<()> {
    let shown = path.display().to_string();
    let mut file = open_output(path)?;

    // Non-blocking exclusive lock
    file.try_lock_exclusive()
        .map_err(|_| PrimerError::file_locked(shown.clone()))?;

    // Lock is released when `file` drops
    write_locked(&mut file, contents, &shown)?;

    tracing::info!(path = %shown, bytes = contents.len(), "wrote log file");
    Ok(())
}

fn write_locked(file: &mut File, contents: &str, shown: &str) -> PrimerResult<()> {
    file.set_len(0)
        .map_err(|e| PrimerError::file_error("truncate", shown, e.to_string()))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| PrimerError::file_error("write", shown, e.to_string()))?;
    file.sync_all()
        .map_err(|e| PrimerError::file_error("sync", shown, e.to_string()))
}
