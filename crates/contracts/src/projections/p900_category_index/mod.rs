//! Category index over the page book: drives the tab rail and the table of contents.

pub mod index;
pub mod tabs;
pub mod toc;

pub use index::{CategoryIndex, CategorySpan};
pub use tabs::{ordered_tabs, CategoryTab};
pub use toc::{toc_entries, TocEntry};
