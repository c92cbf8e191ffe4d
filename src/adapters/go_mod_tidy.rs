use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ModuleTidier;

/// Runs `go mod tidy` through the `go` binary on `PATH`.
#[derive(Debug, Clone)]
pub struct GoModTidy {
    program: String,
    args: Vec<String>,
    display: String,
}

impl Default for GoModTidy {
    fn default() -> Self {
        Self::with_program("go", &["mod", "tidy"])
    }
}

impl GoModTidy {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_program(program: &str, args: &[&str]) -> Self {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let display = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        Self { program: program.to_string(), args, display }
    }
}

impl ModuleTidier for GoModTidy {
    fn command(&self) -> &str {
        &self.display
    }

    fn tidy(&self, dir: &Path) -> Result<(), AppError> {
        tracing::info!(command = %self.command(), directory = %dir.display(), "run module tidy");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .output()
            .map_err(|e| AppError::HookFailed {
                command: self.command().to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::HookFailed {
                command: self.command().to_string(),
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
