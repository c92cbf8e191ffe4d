//! Storage for generated artifacts.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing artifacts below the output directory.
///
/// All `path` arguments are relative to the output directory.
/// Implementations must reject paths that escape it.
pub trait ArtifactStore {
    /// Read an artifact as UTF-8 text; `None` if it does not exist.
    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError>;

    /// Write an artifact, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether an artifact exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Absolute location of the output directory.
    fn root(&self) -> &Path;
}
