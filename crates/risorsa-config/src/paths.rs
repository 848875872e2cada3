//! Configuration file path resolution.

use std::path::PathBuf;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "RISORSA_CONFIG";

/// Path from `RISORSA_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
