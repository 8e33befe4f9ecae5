pub mod config;
pub mod error;
pub mod navigation;
pub mod template_dispatcher;
