//! Group-membership merging.
//!
//! Sources are read in priority order (organization defaults first, then the
//! process-specific insertion groups); the first occurrence of a token wins.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use risorsa_model::EngineConfig;
use tracing::debug;

/// Separator between group tokens in every source and in the merged output.
pub const GROUP_SEPARATOR: char = ';';

/// Prefix of Office 365 group names that lost their leading `O` upstream.
pub const MALFORMED_O365_PREFIX: &str = "365 ";

/// Restores the leading `O` on `365 ...` group names.
pub fn repair_token(token: &str) -> Cow<'_, str> {
    if token.starts_with(MALFORMED_O365_PREFIX) {
        Cow::Owned(format!("O{token}"))
    } else {
        Cow::Borrowed(token)
    }
}

/// A named origin of semicolon-delimited group tokens.
#[derive(Debug, Clone)]
pub enum GroupSource<'a> {
    /// A literal list, always applied.
    Fixed { name: &'a str, groups: &'a str },
    /// A table keyed by the submission's process selector.
    Lookup {
        name: &'a str,
        table: &'a BTreeMap<String, String>,
    },
}

impl<'a> GroupSource<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            GroupSource::Fixed { name, .. } | GroupSource::Lookup { name, .. } => name,
        }
    }

    /// Raw list contributed for `selector`; a missing lookup key contributes nothing.
    pub fn raw(&self, selector: &str) -> &'a str {
        match *self {
            GroupSource::Fixed { groups, .. } => groups,
            GroupSource::Lookup { table, .. } => {
                table.get(selector).map(String::as_str).unwrap_or_default()
            }
        }
    }
}

/// Ordered group sources merged into one membership list.
#[derive(Debug, Clone, Default)]
pub struct GroupPolicy<'a> {
    sources: Vec<GroupSource<'a>>,
}

impl<'a> GroupPolicy<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Organization defaults (`grp_default`) followed by the insertion-group table.
    pub fn from_config(config: &'a EngineConfig) -> Self {
        Self::new()
            .with_source(GroupSource::Fixed {
                name: "default",
                groups: config.default_value("grp_default").unwrap_or_default(),
            })
            .with_source(GroupSource::Lookup {
                name: "inserimento",
                table: &config.insertion_groups,
            })
    }

    #[must_use]
    pub fn with_source(mut self, source: GroupSource<'a>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(&self) -> &[GroupSource<'a>] {
        &self.sources
    }

    pub fn merge(&self, selector: &str) -> String {
        for source in &self.sources {
            debug!(
                source = source.name(),
                selector,
                empty = source.raw(selector).trim().is_empty(),
                "reading group source"
            );
        }
        merge_groups(self.sources.iter().map(|source| source.raw(selector)))
    }
}

/// Merges raw semicolon-delimited lists into one de-duplicated list.
///
/// Tokens are trimmed, empty ones dropped and malformed `365 ` names
/// repaired before de-duplication.
pub fn merge_groups<'s>(sources: impl IntoIterator<Item = &'s str>) -> String {
    let mut seen = BTreeSet::new();
    let mut merged: Vec<String> = Vec::new();
    for raw in sources {
        for token in raw.split(GROUP_SEPARATOR).map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let token = repair_token(token).into_owned();
            if seen.insert(token.clone()) {
                merged.push(token);
            }
        }
    }
    merged.join(";")
}

/// Splits a semicolon list into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(GROUP_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}
