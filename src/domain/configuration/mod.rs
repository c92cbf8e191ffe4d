pub mod controller_config;
pub mod parser;

pub use controller_config::{ControllerConfig, GoConfig, ResolvedController};
pub use parser::parse_config_content;
