//! API Facade for the application.
//!
//! Glues configuration loading, context creation and command execution.

use std::path::PathBuf;

use crate::adapters::{
    EmbeddedTemplateRenderer, FilesystemArtifactStore, GoModTidy, load_config_text,
};
use crate::app::AppContext;
use crate::app::commands::generate;
use crate::domain::identity::ConventionTables;
use crate::domain::{ResolutionWarning, ResolvedController, parse_config_content};
use crate::ports::ArtifactStore;

pub use crate::app::commands::generate::{ArtifactAction, ArtifactReport};
pub use crate::domain::AppError;

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Local path or `http(s)://` URL of the configuration document.
    pub config: String,
    /// Do not run `go mod tidy` after writing.
    pub skip_tidy: bool,
}

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub name: String,
    /// Output directory the artifacts were written to.
    pub base: PathBuf,
    pub artifacts: Vec<ArtifactReport>,
    pub warnings: Vec<ResolutionWarning>,
    pub tidied: bool,
}

/// Decode and resolve a configuration document, logging any warnings.
pub fn resolve_config(content: &str) -> Result<ResolvedController, AppError> {
    let config = parse_config_content(content)?;
    let controller = config.resolve(ConventionTables::builtin())?;
    for resource in &controller.resources {
        tracing::debug!(
            kind = %resource.kind,
            group = %resource.group,
            version = %resource.version,
            package = %resource.package,
            "resolved resource"
        );
    }
    for warning in &controller.warnings {
        warning.log();
    }
    Ok(controller)
}

/// Load the configuration at `options.config` and generate the controller project.
pub fn generate(options: &GenerateOptions) -> Result<GenerationReport, AppError> {
    let content = load_config_text(&options.config)?;
    let controller = resolve_config(&content)?;

    let store = FilesystemArtifactStore::open(&controller.base)?;
    let renderer = EmbeddedTemplateRenderer::new()?;
    let ctx = AppContext::new(store, renderer);

    let tidier = GoModTidy::new();
    let tidier = (!options.skip_tidy).then_some(&tidier);
    let artifacts = generate::execute(&ctx, &controller, tidier)?;

    Ok(GenerationReport {
        name: controller.name,
        base: ctx.store().root().to_path_buf(),
        artifacts,
        warnings: controller.warnings,
        tidied: !options.skip_tidy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn resolve_config_reports_validation_errors() {
        let err = resolve_config("name: Empty\nresources: []\n").unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::NoResources)));
    }

    #[test]
    fn resolve_config_reports_parse_errors() {
        let err = resolve_config("resources: [kind: Pod\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn resolve_config_keeps_warnings() {
        let content = r#"
resources:
  - kind: Widget
    group: acme.io
    isCustom: true
    package: controller/api/v1beta1
"#;
        let controller = resolve_config(content).unwrap();
        assert_eq!(controller.resources[0].version, "v1beta1");
        assert!(matches!(controller.warnings[0], ResolutionWarning::VersionInferred { .. }));
    }
}
