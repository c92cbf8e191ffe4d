//! koolbuilder: generate Kubernetes controller boilerplate from a declarative
//! description of the watched resources.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ArtifactAction, ArtifactReport, GenerateOptions, GenerationReport, generate, resolve_config,
};
pub use domain::AppError;
