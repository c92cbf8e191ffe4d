//! Controller configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::artifacts::DerivedCopy;
use crate::domain::fragments::Fragments;
use crate::domain::identity::{
    ConventionTables, IdentityResolver, Import, ImportSet, ResolutionWarning, ResolvedIdentity,
    ResourceDeclaration, ValidationError,
};

pub const DEFAULT_NAME: &str = "Controller";
pub const DEFAULT_GO_VERSION: &str = "1.21.4";
pub const DEFAULT_K8S_API_VERSION: &str = "0.28.4";
pub const MAX_RETRY: i64 = 10;

/// Controller description as decoded from the configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    /// Output directory.
    #[serde(default = "default_base")]
    pub base: String,
    /// Controller type name; also the receiver of customizable methods.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub go: GoConfig,
    /// How many times a failed key is requeued.
    #[serde(default = "default_retry")]
    pub retry: i64,
    /// Namespace to watch; empty watches the whole cluster.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub resources: Vec<ResourceDeclaration>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            name: default_name(),
            go: GoConfig::default(),
            retry: default_retry(),
            namespace: String::new(),
            resources: Vec::new(),
        }
    }
}

/// Go module settings for the generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoConfig {
    /// Module path; defaults to the lower-cased controller name.
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "k8sAPIVersion")]
    pub k8s_api_version: String,
}

fn default_base() -> String {
    ".".to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_retry() -> i64 {
    3
}

impl ControllerConfig {
    /// Apply defaults for fields left empty in the document.
    pub fn with_defaults(mut self) -> Self {
        if self.base.is_empty() {
            self.base = default_base();
        }
        if self.name.is_empty() {
            self.name = default_name();
        }
        if self.go.module.is_empty() {
            self.go.module = self.name.to_lowercase();
        }
        if self.go.version.is_empty() {
            self.go.version = DEFAULT_GO_VERSION.to_string();
        }
        if self.go.k8s_api_version.is_empty() {
            self.go.k8s_api_version = DEFAULT_K8S_API_VERSION.to_string();
        }
        self
    }

    /// Default, validate and resolve the whole configuration in one pass.
    ///
    /// Either every resource resolves or nothing is returned.
    pub fn resolve(self, tables: &ConventionTables) -> Result<ResolvedController, ValidationError> {
        let config = self.with_defaults();

        if !(0..=MAX_RETRY).contains(&config.retry) {
            return Err(ValidationError::RetryOutOfRange { retry: config.retry });
        }
        if config.resources.is_empty() {
            return Err(ValidationError::NoResources);
        }

        let resolver = IdentityResolver::new(tables, &config.go.module);
        let mut imports = ImportSet::new();
        let mut warnings = Vec::new();
        let mut resources = Vec::with_capacity(config.resources.len());
        let mut derived_copies = Vec::new();

        for decl in &config.resources {
            let resolution = resolver.resolve(decl)?;
            if let Some(import) = resolution.import {
                imports.insert(import);
            }
            if let Some(copy) = DerivedCopy::plan(&resolution.identity, &config.go.module)? {
                derived_copies.push(copy);
            }
            warnings.extend(resolution.warnings);
            resources.push(resolution.identity);
        }

        let fragments = Fragments::synthesize(&resources, &config.namespace);

        Ok(ResolvedController {
            base: PathBuf::from(&config.base),
            name: config.name,
            go: config.go,
            retry: config.retry,
            namespace: config.namespace,
            resources,
            fragments,
            imports: imports.freeze(),
            warnings,
            derived_copies,
        })
    }
}

/// Immutable, fully-resolved controller; the rendering context of every template.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedController {
    #[serde(skip)]
    pub base: PathBuf,
    pub name: String,
    pub go: GoConfig,
    pub retry: i64,
    pub namespace: String,
    pub resources: Vec<ResolvedIdentity>,
    pub fragments: Fragments,
    pub imports: Vec<Import>,
    #[serde(skip)]
    pub warnings: Vec<ResolutionWarning>,
    #[serde(skip)]
    pub derived_copies: Vec<DerivedCopy>,
}
