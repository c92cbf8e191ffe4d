//! Filesystem adapter for the artifact store port.
//!
//! `FilesystemArtifactStore` owns the output directory and rejects any
//! artifact path that would resolve outside of it.

mod artifact_store;

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the output directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Open a store at `root`, creating the directory if it is missing.
    ///
    /// The root is made absolute so that traversal checks never compare
    /// against an empty or relative prefix.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        tracing::info!(directory = %root.display(), "checking directory");
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|err| AppError::io(&root, err))?;
        }
        let root = std::path::absolute(&root).map_err(|err| AppError::io(&root, err))?;
        Ok(Self { root: normalize_path(&root) })
    }

    /// Resolve a relative artifact path, refusing to leave the root.
    pub(crate) fn resolve(&self, path: &Path) -> Result<PathBuf, AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        Ok(full_path)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ArtifactStore;
    use tempfile::TempDir;

    pub fn test_store() -> (TempDir, FilesystemArtifactStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = FilesystemArtifactStore::open(dir.path()).expect("failed to open store");
        (dir, store)
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("out");
        FilesystemArtifactStore::open(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn resolve_prevents_traversal() {
        let (_dir, store) = test_store();

        assert!(store.resolve(Path::new("../main.go")).is_err());
        assert!(store.resolve(Path::new("api/../../main.go")).is_err());
        assert!(store.resolve(Path::new("api/../main.go")).is_ok());
    }

    #[test]
    fn current_directory_root_still_guards_traversal() {
        let store = FilesystemArtifactStore::open(".").unwrap();

        assert!(store.root().is_absolute());
        assert!(store.resolve(Path::new("../escape.go")).is_err());
        assert!(store.resolve(Path::new("api/../../escape.go")).is_err());
        assert!(store.resolve(Path::new("escape.go")).is_ok());
    }

    #[test]
    fn normalize_drops_current_dir_components() {
        let normalized = normalize_path(Path::new("/out/./api/../main.go"));
        assert_eq!(normalized, PathBuf::from("/out/main.go"));
    }
}
