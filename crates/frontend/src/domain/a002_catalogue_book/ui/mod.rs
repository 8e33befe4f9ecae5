pub mod book;
pub mod cover;
pub mod toc;
