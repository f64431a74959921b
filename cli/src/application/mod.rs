pub mod commands;
pub mod errors;
pub mod logging;
pub mod render;
pub mod validators;
