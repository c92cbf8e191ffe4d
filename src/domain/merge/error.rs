use std::fmt;

use thiserror::Error;

/// Which input of a merge a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSide {
    /// The file already on disk.
    Existing,
    /// The freshly rendered template output.
    Candidate,
}

impl fmt::Display for SourceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSide::Existing => write!(f, "existing"),
            SourceSide::Candidate => write!(f, "candidate"),
        }
    }
}

/// Failure to merge a customizable source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The source contains a syntax error; nothing is merged.
    #[error("failed to parse {side} source: syntax error at line {line}, column {column}")]
    Parse { side: SourceSide, line: usize, column: usize },

    /// The source has no `package` clause to anchor imports on.
    #[error("failed to parse {side} source: missing package clause")]
    MissingPackage { side: SourceSide },

    /// The parser gave up without producing a tree.
    #[error("failed to parse {side} source: parser produced no tree")]
    NoTree { side: SourceSide },

    /// The Go grammar could not be loaded into the parser.
    #[error("Go grammar unavailable: {0}")]
    Grammar(String),
}
