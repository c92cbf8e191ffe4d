pub mod artifacts;
pub mod configuration;
pub mod error;
pub mod fragments;
pub mod identity;
pub mod merge;

pub use artifacts::{DerivedCopy, WritePolicy};
pub use configuration::{ControllerConfig, GoConfig, ResolvedController, parse_config_content};
pub use error::AppError;
pub use identity::{
    ConventionTables, Derivation, ResolutionWarning, ResolvedIdentity, ResourceDeclaration,
    ValidationError,
};
pub use merge::{MergeError, MergeOutcome};
