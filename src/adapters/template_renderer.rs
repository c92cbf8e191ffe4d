//! Template renderer backed by the embedded Go templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const TEMPLATE_EXTENSION: &str = ".j2";

/// Renders templates compiled into the binary with Minijinja.
pub struct EmbeddedTemplateRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for EmbeddedTemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedTemplateRenderer")
            .field("templates", &self.template_names().collect::<Vec<_>>())
            .finish()
    }
}

impl EmbeddedTemplateRenderer {
    /// Register every `*.j2` file under `src/assets/templates`.
    ///
    /// Templates are addressed by file name without the `.j2` suffix.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        for file in TEMPLATES_DIR.files() {
            let Some(file_name) = file.path().to_str() else {
                continue;
            };
            let Some(name) = file_name.strip_suffix(TEMPLATE_EXTENSION) else {
                continue;
            };
            let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                template: name.to_string(),
                details: "template is not valid UTF-8".to_string(),
            })?;
            env.add_template(name, source).map_err(|err| template_error(name, err))?;
        }

        Ok(Self { env })
    }

    fn template_names(&self) -> impl Iterator<Item = &str> {
        self.env.templates().map(|(name, _)| name)
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render<C: Serialize>(&self, template_name: &str, context: &C) -> Result<String, AppError> {
        let template =
            self.env.get_template(template_name).map_err(|err| template_error(template_name, err))?;
        template.render(context).map_err(|err| template_error(template_name, err))
    }
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), details: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Module<'a> {
        go: Go<'a>,
    }

    #[derive(Serialize)]
    struct Go<'a> {
        module: &'a str,
        version: &'a str,
        #[serde(rename = "k8sAPIVersion")]
        k8s_api_version: &'a str,
    }

    #[test]
    fn registers_every_artifact_template() {
        let renderer = EmbeddedTemplateRenderer::new().unwrap();
        let mut names: Vec<_> = renderer.template_names().collect();
        names.sort();
        assert_eq!(
            names,
            vec!["controller.go", "deepcopy.go", "event_handler.go", "go.mod", "main.go"]
        );
    }

    #[test]
    fn renders_go_mod() {
        let renderer = EmbeddedTemplateRenderer::new().unwrap();
        let go = Go { module: "podwatcher", version: "1.21.4", k8s_api_version: "0.28.4" };
        let context = Module { go };
        let rendered = renderer.render("go.mod", &context).unwrap();

        assert!(rendered.starts_with("module podwatcher\n"));
        assert!(rendered.contains("go 1.21.4"));
        assert!(rendered.contains("k8s.io/api v0.28.4"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn missing_variable_is_an_error() {
        let renderer = EmbeddedTemplateRenderer::new().unwrap();
        let err = renderer.render("go.mod", &serde_yaml::Value::Null).unwrap_err();
        assert!(matches!(err, AppError::Template { ref template, .. } if template == "go.mod"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let renderer = EmbeddedTemplateRenderer::new().unwrap();
        assert!(renderer.render("missing.go", &()).is_err());
    }
}
