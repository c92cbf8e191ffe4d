//! Shared testing harness for `koolbuilder` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Single builtin resource, generated into `out/`.
pub(crate) const POD_CONFIG: &str = r#"name: PodWatcher
base: out
go:
  module: github.com/acme/pod-watcher
resources:
  - kind: Pod
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Output directory used by the bundled configs.
    pub(crate) fn out_dir(&self) -> PathBuf {
        self.work_dir.join("out")
    }

    /// Build a command for invoking the compiled `koolbuilder` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("koolbuilder").expect("Failed to locate koolbuilder binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a configuration file into the work directory and return its name.
    pub(crate) fn write_config(&self, name: &str, content: &str) -> String {
        fs::write(self.work_dir.join(name), content).expect("Failed to write config");
        name.to_string()
    }

    /// Run `koolbuilder -f <config> --skip-tidy` and assert success.
    pub(crate) fn generate(&self, config: &str) {
        self.cli().args(["-f", config, "--skip-tidy"]).assert().success();
    }

    /// Read a generated file relative to the output directory.
    pub(crate) fn read_output(&self, file: &str) -> String {
        let path = self.out_dir().join(file);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Overwrite a generated file relative to the output directory.
    pub(crate) fn write_output(&self, file: &str, content: &str) {
        fs::write(self.out_dir().join(file), content).expect("Failed to write output file");
    }
}
