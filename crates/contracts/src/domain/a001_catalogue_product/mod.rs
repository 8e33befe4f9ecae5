pub mod aggregate;
pub mod normalizer;

pub use aggregate::{ProductRecord, SpecRow, TemplateHint, VariantRow};
pub use normalizer::parse_products;
