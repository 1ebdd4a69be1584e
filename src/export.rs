//! History export: native save dialog plus a single verbatim write

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Ask the user where to save the history. Returns `None` on cancel.
pub fn prompt_destination() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Text file", &["txt"])
        .set_file_name("history.txt")
        .save_file()
}

/// Write the history's full current contents to the chosen path.
///
/// One atomic in-memory string, one write; there is no partial-write
/// recovery to do.
pub fn write_history(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents)?;
    log::info!("exported {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_round_trips_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        write_history(&path, "sample text").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "sample text");
    }

    #[test]
    fn unwritable_destination_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("history.txt");
        let err = write_history(&path, "sample text").unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
