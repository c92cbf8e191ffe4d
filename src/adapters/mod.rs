pub mod config_source;
mod filesystem;
mod go_mod_tidy;
mod template_renderer;

pub use config_source::load_config_text;
pub use filesystem::FilesystemArtifactStore;
pub use go_mod_tidy::GoModTidy;
pub use template_renderer::EmbeddedTemplateRenderer;
