use crate::model::{ProjectId, StorageError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Persists a fetched page body as-is.
pub fn save_html(path: &Path, body: &[u8]) -> Result<(), StorageError> {
    fs::write(path, body).map_err(|e| StorageError::io(path, e))
}

/// Writes one id per line, truncating any previous file. An empty path is logged and skipped.
pub fn write_ids(ids: &[ProjectId], output_path: &Path) -> Result<(), StorageError> {
    if output_path.as_os_str().is_empty() {
        warn!("Id list file name is empty, nothing written");
        return Ok(());
    }

    let file = File::create(output_path).map_err(|e| StorageError::io(output_path, e))?;
    let mut out = BufWriter::new(file);
    for id in ids {
        writeln!(out, "{}", id).map_err(|e| StorageError::io(output_path, e))?;
    }
    out.flush().map_err(|e| StorageError::io(output_path, e))
}
