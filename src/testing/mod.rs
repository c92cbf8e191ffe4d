//! In-memory port implementations for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ArtifactStore, ModuleTidier};

/// Artifact store kept entirely in memory.
pub struct MemoryArtifactStore {
    root: PathBuf,
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl Default for MemoryArtifactStore {
    fn default() -> Self {
        Self { root: PathBuf::from("/memory/out"), files: RefCell::new(BTreeMap::new()) }
    }
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl AsRef<Path>, content: &str) {
        self.files.borrow_mut().insert(path.as_ref().to_path_buf(), content.to_string());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.get(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.insert(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

/// Tidier that records the directories it was asked to tidy.
#[derive(Default)]
pub struct FakeTidier {
    failure: Option<String>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeTidier {
    pub fn failing(stderr: &str) -> Self {
        Self { failure: Some(stderr.to_string()), calls: RefCell::default() }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl ModuleTidier for FakeTidier {
    fn command(&self) -> &str {
        "fake tidy"
    }

    fn tidy(&self, dir: &Path) -> Result<(), AppError> {
        self.calls.borrow_mut().push(dir.to_path_buf());
        match &self.failure {
            Some(details) => Err(AppError::HookFailed {
                command: self.command().to_string(),
                details: details.clone(),
            }),
            None => Ok(()),
        }
    }
}
