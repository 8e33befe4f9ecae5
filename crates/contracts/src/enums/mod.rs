pub mod template_variant;

pub use template_variant::TemplateVariant;
