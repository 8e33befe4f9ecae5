pub mod view;

pub use view::ProductPage;
