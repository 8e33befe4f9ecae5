pub mod catalog_sheet;
pub mod error_screen;
pub mod page_badge;
pub mod sheet_header;
pub mod spec_table;
