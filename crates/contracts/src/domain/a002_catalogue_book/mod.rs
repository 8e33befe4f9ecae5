pub mod aggregate;
pub mod catalogue;

pub use aggregate::{build_pages, Page};
pub use catalogue::Catalogue;
