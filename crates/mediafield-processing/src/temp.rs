use std::path::{Path, PathBuf};

use mediafield_core::MediaError;
use tempfile::TempDir;

/// Scratch directory for intermediate files during image processing.
///
/// The directory and everything in it is removed when the workspace is
/// dropped, including on error paths.
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn create() -> Result<Self, MediaError> {
        let dir = tempfile::Builder::new().prefix("mediafield-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the workspace and return its path.
    pub fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf, MediaError> {
        let path = self.path_for(name);
        std::fs::write(&path, data)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let workspace = TempWorkspace::create().unwrap();
        let path = workspace.write("source", b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_drop_removes_directory() {
        let workspace = TempWorkspace::create().unwrap();
        let root = workspace.path().to_path_buf();
        workspace.write("source", b"data").unwrap();
        assert!(root.exists());
        drop(workspace);
        assert!(!root.exists());
    }

    #[test]
    fn test_workspaces_are_isolated() {
        let a = TempWorkspace::create().unwrap();
        let b = TempWorkspace::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
