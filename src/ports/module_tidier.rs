use std::path::Path;

use crate::domain::AppError;

/// Post-generation dependency resolution for the generated module.
pub trait ModuleTidier {
    /// Human-readable command, for logs and errors.
    fn command(&self) -> &str;

    /// Resolve and prune the dependencies of the module in `dir`.
    fn tidy(&self, dir: &Path) -> Result<(), AppError>;
}
