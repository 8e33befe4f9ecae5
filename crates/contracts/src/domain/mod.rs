pub mod a001_catalogue_product;
pub mod a002_catalogue_book;
