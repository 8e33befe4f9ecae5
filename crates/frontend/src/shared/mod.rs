pub mod components;
pub mod config;
pub mod data;
pub mod icons;
pub mod input;
pub mod viewport;
