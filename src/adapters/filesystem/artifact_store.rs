//! `ArtifactStore` implementation for `FilesystemArtifactStore`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

use super::FilesystemArtifactStore;

impl ArtifactStore for FilesystemArtifactStore {
    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        let full_path = self.resolve(path)?;
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::io(full_path, err)),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|err| AppError::io(parent, err))?;
        }
        fs::write(&full_path, content).map_err(|err| AppError::io(full_path, err))
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve(path).map(|full_path| full_path.exists()).unwrap_or(false)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
