//! Reader for the "Risorsa Interna" configuration sheet exported as CSV.
//!
//! Every row carries a `Section`, a key and a value:
//!
//! | Section           | Key/App           | Label/Gruppi/Value     |
//! |-------------------|-------------------|------------------------|
//! | OU                | utenti_standard   | OU=Utenti,DC=...       |
//! | InserimentoGruppi | interna           | GRP_A;GRP_B            |
//! | Defaults          | company_interna   | Consip S.p.A.          |
//!
//! Rows from other sections and rows without a key are ignored.

use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use risorsa_model::{EngineConfig, OuOption};

use crate::error::ConfigError;

pub const SECTION_COLUMN: &str = "Section";
pub const KEY_COLUMN: &str = "Key/App";
pub const VALUE_COLUMN: &str = "Label/Gruppi/Value";

/// Sheet sections understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ou,
    InsertionGroups,
    Defaults,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "OU" => Ok(Section::Ou),
            "InserimentoGruppi" => Ok(Section::InsertionGroups),
            "Defaults" => Ok(Section::Defaults),
            other => Err(format!("Unknown section: {}", other)),
        }
    }
}

/// Loads the configuration from a CSV file.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|e| ConfigError::io(path, e))?;
    parse_config(&bytes, path)
}

/// Parses configuration CSV bytes; `path` is only used in error messages.
///
/// Both `,` and `;` separated exports are accepted.
pub fn parse_config(bytes: &[u8], path: &Path) -> Result<EngineConfig, ConfigError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(detect_delimiter(bytes))
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| ConfigError::csv(path, &e))?
        .clone();

    let position = |name: &str| -> Result<usize, ConfigError> {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim() == name)
            .ok_or_else(|| ConfigError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let section_idx = position(SECTION_COLUMN)?;
    let key_idx = position(KEY_COLUMN)?;
    let value_idx = position(VALUE_COLUMN)?;

    let mut config = EngineConfig::default();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| ConfigError::csv(path, &e))?;
        let get = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

        let Ok(section) = get(section_idx).parse::<Section>() else {
            skipped += 1;
            continue;
        };
        let key = get(key_idx);
        if key.is_empty() {
            skipped += 1;
            continue;
        }
        let value = get(value_idx).to_string();

        match section {
            Section::Ou => {
                if let Some(existing) = config.ou_options.iter_mut().find(|o| o.key == key) {
                    warn!(key, "duplicate OU key, keeping last value");
                    existing.label = value;
                } else {
                    config.ou_options.push(OuOption {
                        key: key.to_string(),
                        label: value,
                    });
                }
            }
            Section::InsertionGroups => {
                config.insertion_groups.insert(key.to_string(), value);
            }
            Section::Defaults => {
                config.defaults.insert(key.to_string(), value);
            }
        }
    }

    debug!(
        path = %path.display(),
        ou_options = config.ou_options.len(),
        insertion_groups = config.insertion_groups.len(),
        defaults = config.defaults.len(),
        skipped,
        "configuration loaded"
    );
    Ok(config)
}

fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let commas = header.iter().filter(|b| **b == b',').count();
    let semicolons = header.iter().filter(|b| **b == b';').count();
    if semicolons > commas { b';' } else { b',' }
}
