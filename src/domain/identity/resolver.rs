//! Resolution of partial resource declarations into full identities.

use super::error::ValidationError;
use super::imports::Import;
use super::package_path::{
    DEFAULT_VERSION, group_from_package, import_alias, version_from_package,
};
use super::resource::{Derivation, ResolvedIdentity, ResourceDeclaration};
use super::tables::ConventionTables;
use super::warning::ResolutionWarning;

/// Kind value that marks a placeholder left in a configuration.
pub const UNKNOWN_KIND: &str = "UnknownType";

/// Successful resolution of one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identity: ResolvedIdentity,
    /// Import required to reference the type from the controller module.
    pub import: Option<Import>,
    pub warnings: Vec<ResolutionWarning>,
}

struct Coordinates {
    group: String,
    schema_group: String,
    version: String,
    package: String,
    derivation: Derivation,
}

/// Resolves declarations against a set of conventions for one controller module.
///
/// Precedence is uniform: an explicit field beats a value inferred from the
/// package path, which beats the static default.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver<'a> {
    tables: &'a ConventionTables,
    module: &'a str,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(tables: &'a ConventionTables, module: &'a str) -> Self {
        Self { tables, module }
    }

    pub fn resolve(&self, decl: &ResourceDeclaration) -> Result<Resolution, ValidationError> {
        if decl.kind.is_empty() || decl.kind == UNKNOWN_KIND {
            return Err(ValidationError::InvalidKind { kind: decl.kind.clone() });
        }

        let mut warnings = Vec::new();
        let coordinates = if decl.is_custom {
            self.resolve_custom(decl, &mut warnings)?
        } else {
            self.resolve_builtin(decl, &mut warnings)?
        };

        let (qualified_type_name, import) = if coordinates.package == self.module {
            (decl.kind.clone(), None)
        } else {
            let alias = import_alias(&coordinates.package);
            let qualified = format!("{}.{}", alias, decl.kind);
            (qualified, Some(Import::new(alias, coordinates.package.clone())))
        };

        let identity = ResolvedIdentity {
            kind: decl.kind.clone(),
            lower_kind: decl.kind.to_lowercase(),
            group: coordinates.group,
            schema_group: coordinates.schema_group,
            version: coordinates.version,
            package: coordinates.package,
            qualified_type_name,
            is_custom: decl.is_custom,
            is_namespaced: decl.is_namespaced,
            derivation: coordinates.derivation,
        };
        Ok(Resolution { identity, import, warnings })
    }

    fn resolve_custom(
        &self,
        decl: &ResourceDeclaration,
        warnings: &mut Vec<ResolutionWarning>,
    ) -> Result<Coordinates, ValidationError> {
        if decl.group.is_empty() {
            return Err(ValidationError::MissingGroup { kind: decl.kind.clone() });
        }
        if self.tables.is_reserved_group(&decl.group) {
            return Err(ValidationError::ReservedGroup {
                kind: decl.kind.clone(),
                group: decl.group.clone(),
                reserved: self.tables.reserved_groups(),
            });
        }

        let package =
            if decl.package.is_empty() { self.module.to_string() } else { decl.package.clone() };
        let version = match (decl.version.is_empty(), version_from_package(&package)) {
            (true, Some(found)) => {
                warnings.push(ResolutionWarning::VersionInferred {
                    resource: decl.kind.clone(),
                    version: found.to_string(),
                    package: package.clone(),
                });
                found.to_string()
            }
            (true, None) => {
                warnings.push(ResolutionWarning::NoVersionInPackage {
                    resource: decl.kind.clone(),
                    package: package.clone(),
                });
                DEFAULT_VERSION.to_string()
            }
            (false, found) => {
                self.check_consistency(decl, found, &package, warnings);
                decl.version.clone()
            }
        };

        Ok(Coordinates {
            group: decl.group.clone(),
            schema_group: decl.group.clone(),
            version,
            package,
            derivation: decl.template,
        })
    }

    fn resolve_builtin(
        &self,
        decl: &ResourceDeclaration,
        warnings: &mut Vec<ResolutionWarning>,
    ) -> Result<Coordinates, ValidationError> {
        let table_group = self.tables.group_for_kind(&decl.kind);
        if table_group.is_none() && decl.package.is_empty() {
            return Err(ValidationError::UnknownKind { kind: decl.kind.clone() });
        }

        let group = if !decl.group.is_empty() {
            decl.group.clone()
        } else if let Some(group) = table_group {
            group.to_string()
        } else {
            group_from_package(&decl.package)
                .ok_or_else(|| ValidationError::UnknownKind { kind: decl.kind.clone() })?
        };

        let (version, package) = match (decl.version.is_empty(), decl.package.is_empty()) {
            (true, true) => {
                (DEFAULT_VERSION.to_string(), self.tables.builtin_package(&group, DEFAULT_VERSION))
            }
            (false, true) => {
                (decl.version.clone(), self.tables.builtin_package(&group, &decl.version))
            }
            (true, false) => {
                let version = match version_from_package(&decl.package) {
                    Some(found) => found.to_string(),
                    None => {
                        warnings.push(ResolutionWarning::NoVersionInPackage {
                            resource: decl.kind.clone(),
                            package: decl.package.clone(),
                        });
                        DEFAULT_VERSION.to_string()
                    }
                };
                (version, decl.package.clone())
            }
            (false, false) => {
                let found = version_from_package(&decl.package);
                self.check_consistency(decl, found, &decl.package, warnings);
                (decl.version.clone(), decl.package.clone())
            }
        };

        if decl.template != Derivation::None {
            warnings.push(ResolutionWarning::DerivationIgnored { resource: decl.kind.clone() });
        }

        Ok(Coordinates {
            schema_group: self.tables.schema_group(&group),
            group,
            version,
            package,
            derivation: Derivation::None,
        })
    }

    fn check_consistency(
        &self,
        decl: &ResourceDeclaration,
        found: Option<&str>,
        package: &str,
        warnings: &mut Vec<ResolutionWarning>,
    ) {
        if let Some(found) = found
            && found != decl.version
        {
            warnings.push(ResolutionWarning::InconsistentVersion {
                resource: decl.kind.clone(),
                version: decl.version.clone(),
                package_version: found.to_string(),
                package: package.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = "controller";

    fn resolve(decl: &ResourceDeclaration) -> Result<Resolution, ValidationError> {
        IdentityResolver::new(ConventionTables::builtin(), MODULE).resolve(decl)
    }

    #[test]
    fn builtin_deployment_defaults_to_apps_v1() {
        let resolution = resolve(&ResourceDeclaration::builtin("Deployment")).unwrap();
        let identity = &resolution.identity;
        assert_eq!(identity.group, "apps");
        assert_eq!(identity.schema_group, "apps");
        assert_eq!(identity.version, "v1");
        assert_eq!(identity.package, "k8s.io/api/apps/v1");
        assert_eq!(identity.qualified_type_name, "appsv1.Deployment");
        assert_eq!(resolution.import, Some(Import::new("appsv1", "k8s.io/api/apps/v1")));
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn builtin_pod_uses_core_group() {
        let identity = resolve(&ResourceDeclaration::builtin("Pod")).unwrap().identity;
        assert_eq!(identity.group, "core");
        assert_eq!(identity.schema_group, "");
        assert_eq!(identity.version, "v1");
        assert_eq!(identity.package, "k8s.io/api/core/v1");
        assert_eq!(identity.lower_kind, "pod");
        assert_eq!(identity.qualified_type_name, "corev1.Pod");
    }

    #[test]
    fn builtin_explicit_version_builds_package() {
        let decl = ResourceDeclaration {
            version: "v2".into(),
            ..ResourceDeclaration::builtin("HorizontalPodAutoscaler")
        };
        let identity = resolve(&decl).unwrap().identity;
        assert_eq!(identity.package, "k8s.io/api/autoscaling/v2");
        assert_eq!(identity.qualified_type_name, "autoscalingv2.HorizontalPodAutoscaler");
    }

    #[test]
    fn builtin_version_taken_from_package() {
        let decl = ResourceDeclaration {
            package: "k8s.io/api/batch/v1beta1".into(),
            ..ResourceDeclaration::builtin("CronJob")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.version, "v1beta1");
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn builtin_package_without_version_warns_and_defaults() {
        let decl = ResourceDeclaration {
            package: "k8s.io/api/batch".into(),
            ..ResourceDeclaration::builtin("Job")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.version, "v1");
        assert!(matches!(
            resolution.warnings.as_slice(),
            [ResolutionWarning::NoVersionInPackage { .. }]
        ));
    }

    #[test]
    fn builtin_mismatch_keeps_explicit_version() {
        let decl = ResourceDeclaration {
            version: "v2".into(),
            package: "k8s.io/api/apps/v1".into(),
            ..ResourceDeclaration::builtin("Deployment")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.version, "v2");
        assert_eq!(resolution.identity.package, "k8s.io/api/apps/v1");
        assert!(matches!(
            resolution.warnings.as_slice(),
            [ResolutionWarning::InconsistentVersion { package_version, .. }]
                if package_version == "v1"
        ));
    }

    #[test]
    fn unknown_builtin_kind_without_package_fails() {
        let err = resolve(&ResourceDeclaration::builtin("Widget")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownKind { ref kind } if kind == "Widget"));
        assert_eq!(err.kind_tag(), "ConfigInvalid");
    }

    #[test]
    fn unknown_builtin_kind_with_package_infers_group() {
        let decl = ResourceDeclaration {
            package: "k8s.io/api/certificates/v1".into(),
            ..ResourceDeclaration::builtin("CertificateSigningRequest")
        };
        let identity = resolve(&decl).unwrap().identity;
        assert_eq!(identity.group, "certificates");
        assert_eq!(identity.version, "v1");
        assert_eq!(identity.qualified_type_name, "certificatesv1.CertificateSigningRequest");
    }

    #[test]
    fn builtin_template_request_is_ignored() {
        let decl = ResourceDeclaration {
            template: Derivation::Both,
            ..ResourceDeclaration::builtin("Pod")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.derivation, Derivation::None);
        assert!(matches!(
            resolution.warnings.as_slice(),
            [ResolutionWarning::DerivationIgnored { .. }]
        ));
    }

    #[test]
    fn empty_and_placeholder_kinds_fail() {
        for kind in ["", UNKNOWN_KIND] {
            for is_custom in [false, true] {
                let decl = ResourceDeclaration {
                    kind: kind.into(),
                    group: "example.com".into(),
                    is_custom,
                    ..ResourceDeclaration::default()
                };
                let err = resolve(&decl).unwrap_err();
                assert!(matches!(err, ValidationError::InvalidKind { .. }));
                assert_eq!(err.kind_tag(), "ConfigInvalid");
            }
        }
    }

    #[test]
    fn custom_resource_with_reserved_group_conflicts() {
        for group in ["apps", "core", "gateway.networking.k8s.io"] {
            let err = resolve(&ResourceDeclaration::custom("Widget", group)).unwrap_err();
            assert_eq!(err.kind_tag(), "IdentityConflict", "group {group}");
        }
    }

    #[test]
    fn custom_resource_without_group_fails() {
        let decl =
            ResourceDeclaration { is_custom: true, ..ResourceDeclaration::builtin("Widget") };
        assert!(matches!(resolve(&decl), Err(ValidationError::MissingGroup { .. })));
    }

    #[test]
    fn custom_resource_in_own_module_is_unqualified() {
        let resolution = resolve(&ResourceDeclaration::custom("Widget", "example.com")).unwrap();
        let identity = &resolution.identity;
        assert_eq!(identity.package, MODULE);
        assert_eq!(identity.schema_group, "example.com");
        assert_eq!(identity.version, "v1");
        assert_eq!(identity.qualified_type_name, "Widget");
        assert!(resolution.import.is_none());
        assert!(matches!(
            resolution.warnings.as_slice(),
            [ResolutionWarning::NoVersionInPackage { .. }]
        ));
    }

    #[test]
    fn custom_resource_version_inferred_from_package() {
        let decl = ResourceDeclaration {
            package: "controller/api/v1alpha1".into(),
            ..ResourceDeclaration::custom("Widget", "example.com")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.version, "v1alpha1");
        assert_eq!(resolution.identity.qualified_type_name, "apiv1alpha1.Widget");
        assert!(matches!(
            resolution.warnings.as_slice(),
            [ResolutionWarning::VersionInferred { version, .. }] if version == "v1alpha1"
        ));
    }

    #[test]
    fn custom_resource_mismatch_warns_but_keeps_explicit() {
        let decl = ResourceDeclaration {
            version: "v2".into(),
            package: "github.com/acme/widgets/v1".into(),
            ..ResourceDeclaration::custom("Widget", "acme.io")
        };
        let resolution = resolve(&decl).unwrap();
        assert_eq!(resolution.identity.version, "v2");
        assert_eq!(resolution.import, Some(Import::new("widgetsv1", "github.com/acme/widgets/v1")));
        assert_eq!(resolution.warnings.len(), 1);
    }

    #[test]
    fn resolved_fields_are_never_empty() {
        let decls = [
            ResourceDeclaration::builtin("Pod"),
            ResourceDeclaration::builtin("Ingress"),
            ResourceDeclaration::custom("Widget", "example.com"),
        ];
        for decl in &decls {
            let identity = resolve(decl).unwrap().identity;
            assert!(!identity.group.is_empty());
            assert!(!identity.version.is_empty());
            assert!(!identity.package.is_empty());
            assert!(!identity.qualified_type_name.is_empty());
        }
    }
}
