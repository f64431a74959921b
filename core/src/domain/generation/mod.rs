pub mod helpers;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use services::RecipeGenerator;
pub use value_objects::*;
