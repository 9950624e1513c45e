//! Temporary storage for uploaded files.
//!
//! Each upload is spooled to its own temp file under the configured upload
//! directory and removed when the guard drops, so cleanup happens on every
//! exit path out of a request, including extraction failures.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use uuid::Uuid;

/// A file handed to the extraction pipeline, deleted on drop.
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Write `data` to a fresh temp file under `dir`. The name is prefixed
    /// with a UUID and keeps the original extension, which the extractor
    /// dispatches on.
    pub fn create(dir: &Path, extension: &str, data: &[u8]) -> std::io::Result<Self> {
        let suffix = if extension.is_empty() {
            String::new()
        } else {
            format!(".{extension}")
        };

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", Uuid::new_v4()))
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(data)?;
        file.flush()?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_keeps_the_original_extension() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::create(dir.path(), "pdf", b"%PDF-1.5").unwrap();

        assert!(upload.path().exists());
        assert_eq!(
            upload.path().extension().and_then(|e| e.to_str()),
            Some("pdf")
        );
        assert_eq!(std::fs::read(upload.path()).unwrap(), b"%PDF-1.5");
    }

    #[test]
    fn upload_without_extension_gets_no_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::create(dir.path(), "", b"raw").unwrap();
        assert!(upload.path().extension().is_none());
    }

    #[test]
    fn file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::create(dir.path(), "txt", b"ephemeral").unwrap();
        let path = upload.path().to_path_buf();

        assert!(path.exists());
        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn concurrent_uploads_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = TempUpload::create(dir.path(), "txt", b"a").unwrap();
        let b = TempUpload::create(dir.path(), "txt", b"b").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
