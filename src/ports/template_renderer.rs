use serde::Serialize;

use crate::domain::AppError;

/// Renders named source templates.
pub trait TemplateRenderer {
    /// Render the template registered as `template_name` against `context`.
    fn render<C: Serialize>(&self, template_name: &str, context: &C) -> Result<String, AppError>;
}
