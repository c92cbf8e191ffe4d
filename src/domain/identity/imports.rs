use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// An aliased import of a Go package.
///
/// Ordering is by package path first, so a sorted collection of imports is
/// lexicographic by path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Import {
    pub package: String,
    pub alias: String,
}

impl Import {
    pub fn new(alias: impl Into<String>, package: impl Into<String>) -> Self {
        Self { package: package.into(), alias: alias.into() }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.alias, self.package)
    }
}

/// Deduplicating accumulator for imports gathered across resources.
#[derive(Debug, Default)]
pub struct ImportSet {
    imports: BTreeSet<Import>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    /// Consume the set into its sorted, deduplicated form.
    pub fn freeze(self) -> Vec<Import> {
        self.imports.into_iter().collect()
    }
}
