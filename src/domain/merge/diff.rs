use std::collections::HashSet;

use super::outline::{ImportSpec, MethodDecl, SourceOutline};

/// Declarations present in a candidate but missing from an existing file.
///
/// The diff is additive only: nothing in it ever removes or replaces
/// existing content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditiveDiff {
    pub imports: Vec<ImportSpec>,
    pub methods: Vec<MethodDecl>,
}

impl AdditiveDiff {
    /// Compare outlines. Methods are matched by name on the `owner` receiver;
    /// a method that already exists is kept as is, whatever its body.
    pub fn compute(existing: &SourceOutline, candidate: &SourceOutline, owner: &str) -> Self {
        let mut known_paths: HashSet<&str> =
            existing.imports.iter().map(|spec| spec.path.as_str()).collect();
        let imports = candidate
            .imports
            .iter()
            .filter(|spec| known_paths.insert(spec.path.as_str()))
            .cloned()
            .collect();

        let mut known_methods: HashSet<&str> = existing.method_names(owner).collect();
        let methods = candidate
            .methods
            .iter()
            .filter(|method| method.receiver == owner && known_methods.insert(method.name.as_str()))
            .cloned()
            .collect();

        Self { imports, methods }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.methods.is_empty()
    }
}
