//! Controller configuration decoding.

use crate::domain::AppError;

use super::ControllerConfig;

/// Decode a configuration document.
///
/// Fields missing from the document keep their defaults; validation happens
/// later, during resolution.
pub fn parse_config_content(content: &str) -> Result<ControllerConfig, AppError> {
    let config: ControllerConfig = serde_yaml::from_str(content)?;
    Ok(config)
}
