pub mod global_context;
pub mod tab_rail;
pub mod toolbar;
