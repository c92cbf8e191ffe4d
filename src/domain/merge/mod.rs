//! Incremental merge of regenerated Go sources.
//!
//! A merge runs in three phases: both sources are parsed into immutable
//! [`SourceOutline`]s, an [`AdditiveDiff`] is computed between them, and the
//! diff is spliced into the existing text. Existing declarations always win.

mod diff;
mod error;
mod outline;
mod splice;

pub use diff::AdditiveDiff;
pub use error::{MergeError, SourceSide};
pub use outline::{ImportDecl, ImportSpec, MethodDecl, SourceOutline};
pub use splice::splice;

/// Result of merging a candidate into an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The existing file already contains everything; nothing to write.
    Unchanged,
    /// New declarations were added.
    Merged {
        source: String,
        added_imports: Vec<String>,
        added_methods: Vec<String>,
    },
}

impl MergeOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, MergeOutcome::Unchanged)
    }
}

/// Merge `candidate` into `existing`, adding the imports it lacks and the
/// methods on `owner` it does not define yet.
pub fn merge(existing: &str, candidate: &str, owner: &str) -> Result<MergeOutcome, MergeError> {
    let existing_outline = SourceOutline::parse(existing, SourceSide::Existing)?;
    let candidate_outline = SourceOutline::parse(candidate, SourceSide::Candidate)?;

    let diff = AdditiveDiff::compute(&existing_outline, &candidate_outline, owner);
    if diff.is_empty() {
        tracing::debug!(%owner, "no new declarations");
        return Ok(MergeOutcome::Unchanged);
    }

    for spec in &diff.imports {
        tracing::info!(package = %spec.path, "add new package to import list");
    }
    for method in &diff.methods {
        tracing::info!(method = %format!("(*{owner}).{}", method.name), "add new method");
    }

    let source = splice(existing, &existing_outline, &diff);
    Ok(MergeOutcome::Merged {
        source,
        added_imports: diff.imports.into_iter().map(|spec| spec.path).collect(),
        added_methods: diff.methods.into_iter().map(|method| method.name).collect(),
    })
}
