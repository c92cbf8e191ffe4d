use serde::{Deserialize, Serialize};

/// Which derived sources to emit for a custom resource type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    #[default]
    None,
    /// Emit the struct definition only.
    Definition,
    /// Emit the deep-copy methods only.
    #[serde(alias = "deepCopy")]
    DeepCopy,
    /// Emit both the definition and the deep-copy methods.
    Both,
}

impl Derivation {
    pub fn emits_definition(self) -> bool {
        matches!(self, Derivation::Definition | Derivation::Both)
    }

    pub fn emits_deep_copy(self) -> bool {
        matches!(self, Derivation::DeepCopy | Derivation::Both)
    }
}

/// A resource as written in the configuration, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceDeclaration {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub template: Derivation,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub is_namespaced: bool,
}

impl ResourceDeclaration {
    pub fn builtin(kind: &str) -> Self {
        Self { kind: kind.to_string(), ..Self::default() }
    }

    pub fn custom(kind: &str, group: &str) -> Self {
        Self {
            kind: kind.to_string(),
            group: group.to_string(),
            is_custom: true,
            ..Self::default()
        }
    }
}

/// A fully-qualified resource identity.
///
/// `group`, `version`, `package` and `qualified_type_name` are never empty.
/// `schema_group` is empty only for the core group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub kind: String,
    pub lower_kind: String,
    pub group: String,
    pub schema_group: String,
    pub version: String,
    pub package: String,
    pub qualified_type_name: String,
    pub is_custom: bool,
    pub is_namespaced: bool,
    pub derivation: Derivation,
}
