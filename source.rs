use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use log::debug;

/// Failures while loading a book
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },
}

/// Anything that can hand back the whole text of a book
pub trait TextSource {
    fn read_text(&self, path: &Path) -> Result<String, SourceError>;
}

/// Reads books from the local filesystem as strict UTF-8
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl TextSource for FileSource {
    fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound { path: path.to_path_buf() },
            _ => SourceError::Unreadable { path: path.to_path_buf(), source },
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());

        // no BOM stripping, no replacement characters
        UTF_8
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| SourceError::InvalidEncoding { path: path.to_path_buf() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FileSource.read_text(&path).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }), "got {err:?}");
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_reads_utf8_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("Frankenstein; or, the Modern Prométhée\n".as_bytes()).unwrap();

        let text = FileSource.read_text(file.path()).unwrap();
        assert_eq!(text, "Frankenstein; or, the Modern Prométhée\n");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'a', 0xff, 0xfe, b'b']).unwrap();

        let err = FileSource.read_text(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::InvalidEncoding { .. }), "got {err:?}");
    }

    #[test]
    fn test_bom_is_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFhi").unwrap();

        let text = FileSource.read_text(file.path()).unwrap();
        assert_eq!(text, "\u{FEFF}hi");
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        let err = FileSource.read_text(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }), "got {err:?}");
    }
}
