//! Names and placement of the generated artifacts.

use std::path::PathBuf;

use serde::Serialize;

use super::identity::{Derivation, ResolvedIdentity, ValidationError};

/// Module descriptor, written once.
pub const MODULE_FILE: &str = "go.mod";
/// Program entry point, always rewritten.
pub const MAIN_FILE: &str = "main.go";
/// Controller definition, always rewritten.
pub const CONTROLLER_FILE: &str = "controller.go";
/// Developer-customizable event handlers, merged on regeneration.
pub const EVENT_HANDLER_FILE: &str = "event_handler.go";
/// Suffix of per-resource derived sources.
pub const DERIVED_SUFFIX: &str = "_gen.deepcopy.go";

/// How an artifact is reconciled with what is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Write only if the file does not exist yet.
    CreateOnce,
    /// Replace any existing file.
    Rewrite,
    /// Merge new declarations into an existing file.
    Merge,
}

/// A derived-source file planned for one custom resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedCopy {
    pub resource: ResolvedIdentity,
    /// Path relative to the output directory.
    #[serde(skip)]
    pub path: PathBuf,
    /// Go package clause for the file.
    pub package_name: String,
    /// Emit the struct definition.
    pub emits_definition: bool,
    /// Emit `DeepCopyInto`, `DeepCopy` and `DeepCopyObject`.
    pub emits_deep_copy: bool,
}

impl DerivedCopy {
    /// Plan the derived source for `resource`, if it asks for one.
    ///
    /// Files for types in the controller module land in the output root;
    /// types in sub-packages land in the directory the package implies.
    pub fn plan(
        resource: &ResolvedIdentity,
        module: &str,
    ) -> Result<Option<Self>, ValidationError> {
        if !resource.is_custom || resource.derivation == Derivation::None {
            return Ok(None);
        }

        let file_name = format!("{}{}", resource.lower_kind, DERIVED_SUFFIX);
        let (path, package_name) = if resource.package == module {
            (PathBuf::from(file_name), "main".to_string())
        } else {
            let relative = resource
                .package
                .strip_prefix(module)
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|rest| rest.split('/').all(is_plain_segment))
                .ok_or_else(|| ValidationError::PackageOutsideModule {
                    kind: resource.kind.clone(),
                    package: resource.package.clone(),
                    module: module.to_string(),
                })?;
            let package_name = relative
                .rsplit('/')
                .next()
                .unwrap_or(relative)
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            let mut path: PathBuf = relative.split('/').collect();
            path.push(file_name);
            (path, package_name)
        };

        Ok(Some(Self {
            resource: resource.clone(),
            path,
            package_name,
            emits_definition: resource.derivation.emits_definition(),
            emits_deep_copy: resource.derivation.emits_deep_copy(),
        }))
    }
}

/// A directory segment that stays where it is written.
fn is_plain_segment(segment: &str) -> bool {
    !matches!(segment, "" | "." | "..")
}
