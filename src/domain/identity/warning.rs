use std::fmt;

use serde::Serialize;

/// A non-fatal inconsistency the resolver settled by precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolutionWarning {
    /// Version was missing and taken from the package path.
    VersionInferred { resource: String, version: String, package: String },
    /// Version was missing and the package path carries none either.
    NoVersionInPackage { resource: String, package: String },
    /// Explicit version disagrees with the package path; the explicit field is kept.
    InconsistentVersion {
        resource: String,
        version: String,
        package_version: String,
        package: String,
    },
    /// A derived-source template was requested for a builtin type.
    DerivationIgnored { resource: String },
}

impl ResolutionWarning {
    pub fn resource(&self) -> &str {
        match self {
            ResolutionWarning::VersionInferred { resource, .. }
            | ResolutionWarning::NoVersionInPackage { resource, .. }
            | ResolutionWarning::InconsistentVersion { resource, .. }
            | ResolutionWarning::DerivationIgnored { resource } => resource,
        }
    }

    /// Emit the warning through `tracing`.
    pub fn log(&self) {
        match self {
            ResolutionWarning::VersionInferred { resource, version, package } => {
                tracing::warn!(
                    %resource,
                    %version,
                    %package,
                    "version taken from package; this may cause incompatibility"
                );
            }
            ResolutionWarning::NoVersionInPackage { resource, package } => {
                tracing::warn!(
                    %resource,
                    %package,
                    "no version information in package; using default version \"v1\""
                );
            }
            ResolutionWarning::InconsistentVersion {
                resource,
                version,
                package_version,
                package,
            } => {
                tracing::warn!(
                    %resource,
                    %version,
                    %package_version,
                    %package,
                    "version in package is inconsistent with resource version"
                );
            }
            ResolutionWarning::DerivationIgnored { resource } => {
                tracing::warn!(
                    %resource,
                    "builtin resources should not generate derived sources; template ignored"
                );
            }
        }
    }
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::VersionInferred { resource, version, package } => {
                write!(f, "{resource}: version {version} inferred from package '{package}'")
            }
            ResolutionWarning::NoVersionInPackage { resource, package } => {
                write!(f, "{resource}: no version in package '{package}', defaulting to v1")
            }
            ResolutionWarning::InconsistentVersion {
                resource,
                version,
                package_version,
                package,
            } => write!(
                f,
                "{resource}: version {version} differs from {package_version} \
                 in package '{package}'"
            ),
            ResolutionWarning::DerivationIgnored { resource } => {
                write!(f, "{resource}: builtin type, derived sources not generated")
            }
        }
    }
}
