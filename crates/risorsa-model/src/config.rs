use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selectable organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OuOption {
    pub key: String,
    pub label: String,
}

/// Lookups resolved from the uploaded configuration sheet.
///
/// Passed by reference into every engine call; nothing reads configuration
/// from global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// OU options in sheet order.
    pub ou_options: Vec<OuOption>,
    /// Semicolon-delimited group lists keyed by process.
    pub insertion_groups: BTreeMap<String, String>,
    pub defaults: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Returns a non-empty default value.
    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn default_or(&self, key: &str, fallback: &str) -> String {
        self.default_value(key).unwrap_or(fallback).to_string()
    }

    pub fn ou_option(&self, key: &str) -> Option<&OuOption> {
        self.ou_options.iter().find(|o| o.key == key)
    }

    /// Resolves the OU option for a submission.
    ///
    /// An explicit key must match an option; otherwise the option labelled
    /// `ou_default` is used, falling back to the first option.
    pub fn resolve_ou(&self, selected: Option<&str>) -> Option<&OuOption> {
        if let Some(key) = selected.map(str::trim).filter(|k| !k.is_empty()) {
            return self.ou_option(key);
        }
        self.default_value("ou_default")
            .and_then(|label| self.ou_options.iter().find(|o| o.label == label))
            .or_else(|| self.ou_options.first())
    }
}
