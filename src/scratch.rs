//! Invocation-scoped scratch source files.
//!
//! Each compile invocation materializes the editor buffer to exactly one
//! uniquely named file, which must be gone again before the result reaches
//! the caller. Removal rides on `Drop` so every exit path cleans up.

use crate::config::{InvokeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Scratch source file scoped to a single compile invocation.
pub struct SourceScratch {
    path: PathBuf,
}

impl SourceScratch {
    /// Write `source` verbatim to a uniquely named file under `base_dir`.
    ///
    /// The filename is a fresh UUID plus `suffix`, so concurrent invocations
    /// never collide on a path.
    pub fn create(base_dir: &Path, suffix: &str, source: &str) -> Result<Self> {
        let filename = format!("{}{}", Uuid::new_v4(), suffix);
        let path = base_dir.join(filename);

        fs::write(&path, source).map_err(|e| {
            InvokeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write scratch source {}: {}", path.display(), e),
            ))
        })?;

        Ok(SourceScratch { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the scratch file (idempotent).
    pub fn cleanup(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                log::warn!(
                    "Failed to remove scratch source {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for SourceScratch {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pseudopad_test_{}_{}", name, Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_source_verbatim() {
        let dir = test_dir("verbatim");

        let scratch = SourceScratch::create(&dir, ".pseudo", "x = 1\ny = 2\n").unwrap();
        assert!(scratch.path().exists());
        assert_eq!(fs::read_to_string(scratch.path()).unwrap(), "x = 1\ny = 2\n");
        assert_eq!(
            scratch.path().extension().and_then(|e| e.to_str()),
            Some("pseudo")
        );

        drop(scratch);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_source_creates_empty_file() {
        let dir = test_dir("empty");

        let scratch = SourceScratch::create(&dir, ".pseudo", "").unwrap();
        assert_eq!(fs::read_to_string(scratch.path()).unwrap(), "");

        drop(scratch);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn removed_on_drop() {
        let dir = test_dir("drop");

        let path = {
            let scratch = SourceScratch::create(&dir, ".pseudo", "code").unwrap();
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn cleanup_is_idempotent() {
        let dir = test_dir("idempotent");

        let scratch = SourceScratch::create(&dir, ".pseudo", "code").unwrap();
        scratch.cleanup();
        assert!(!scratch.path().exists());
        // Second cleanup (and the Drop after it) must not panic.
        scratch.cleanup();

        drop(scratch);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn concurrent_scratch_files_get_distinct_paths() {
        let dir = test_dir("distinct");

        let a = SourceScratch::create(&dir, ".pseudo", "a").unwrap();
        let b = SourceScratch::create(&dir, ".pseudo", "b").unwrap();
        assert_ne!(a.path(), b.path());
        assert_eq!(fs::read_to_string(a.path()).unwrap(), "a");
        assert_eq!(fs::read_to_string(b.path()).unwrap(), "b");

        drop(a);
        drop(b);
        let _ = fs::remove_dir_all(&dir);
    }
}
