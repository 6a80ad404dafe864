pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{build_config, build_input_config};
pub use models::{AppConfig, InputConfig};
