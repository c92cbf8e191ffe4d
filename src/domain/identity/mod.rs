//! Resource identity resolution.

mod error;
mod imports;
pub mod package_path;
mod resolver;
mod resource;
mod tables;
mod warning;

pub use error::ValidationError;
pub use imports::{Import, ImportSet};
pub use resolver::{IdentityResolver, Resolution, UNKNOWN_KIND};
pub use resource::{Derivation, ResolvedIdentity, ResourceDeclaration};
pub use tables::{API_ROOT, ConventionTables, RESERVED_GROUP_SUFFIX};
pub use warning::ResolutionWarning;
