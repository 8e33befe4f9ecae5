//! Headless core of the catalogue: product records, the page book,
//! template dispatch, spread pagination and the category index.
//!
//! Nothing in this crate touches a browser API; the frontend feeds it
//! viewport, keyboard and touch signals and renders what it returns.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
