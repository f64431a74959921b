pub mod common;
pub mod generation;
pub mod recipe;
pub mod store;
