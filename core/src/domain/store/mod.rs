pub mod ports;
pub mod services;

pub use ports::*;
pub use services::{RECIPES_STORAGE_KEY, RecipeSnapshot, RecipeStore};
