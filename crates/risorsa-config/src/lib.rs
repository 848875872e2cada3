#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::ConfigError;
pub use crate::loader::{Section, load_config, parse_config};
pub use crate::paths::{CONFIG_ENV_VAR, config_path_from_env};
