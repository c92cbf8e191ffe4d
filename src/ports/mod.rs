mod artifact_store;
mod module_tidier;
mod template_renderer;

pub use artifact_store::ArtifactStore;
pub use module_tidier::ModuleTidier;
pub use template_renderer::TemplateRenderer;
