use thiserror::Error;

/// Fatal outcome of resolving a controller configuration.
///
/// Every variant belongs to one of two stable categories reported by
/// [`ValidationError::kind_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("config is invalid: retry must be between 0 and 10, got {retry}")]
    RetryOutOfRange { retry: i64 },

    #[error("config is invalid: no resource to control")]
    NoResources,

    #[error("config is invalid: resource kind '{kind}' is empty or a placeholder")]
    InvalidKind { kind: String },

    #[error(
        "config is invalid: unknown resource kind '{kind}'; if you need to control a builtin \
         resource, set package to k8s.io/api/<package-group>/<version> and try again"
    )]
    UnknownKind { kind: String },

    #[error("config is invalid: custom resource '{kind}' has no group")]
    MissingGroup { kind: String },

    #[error(
        "invalid third-party group '{group}' for kind '{kind}': group cannot be any of {reserved} \
         or end with \".k8s.io\"; for a builtin resource leave isCustom unset"
    )]
    ReservedGroup { kind: String, group: String, reserved: String },

    #[error(
        "config is invalid: cannot place derived sources for '{kind}': package '{package}' is \
         outside module '{module}'"
    )]
    PackageOutsideModule { kind: String, package: String, module: String },
}

impl ValidationError {
    /// Machine-stable category of the error.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            ValidationError::ReservedGroup { .. } => "IdentityConflict",
            _ => "ConfigInvalid",
        }
    }
}
