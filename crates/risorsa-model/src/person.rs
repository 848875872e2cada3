use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum identifier length (suffix excluded) for internal resources.
pub const INTERNAL_IDENTIFIER_LIMIT: usize = 20;

/// Maximum identifier length (suffix excluded) for external resources.
pub const EXTERNAL_IDENTIFIER_LIMIT: usize = 16;

/// Suffix appended to identifiers of external resources.
pub const EXTERNAL_SUFFIX: &str = ".ext";

/// Name parts of a person as typed in the form.
///
/// `first` and `last` are required by the form; the second parts are optional
/// and stay empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    #[serde(default)]
    pub second_first: String,
    pub last: String,
    #[serde(default)]
    pub second_last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_second_first(mut self, second_first: impl Into<String>) -> Self {
        self.second_first = second_first.into();
        self
    }

    #[must_use]
    pub fn with_second_last(mut self, second_last: impl Into<String>) -> Self {
        self.second_last = second_last.into();
        self
    }
}

/// Whether the new resource is an employee or an external party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Interna,
    Esterna,
}

impl ResourceKind {
    pub fn is_external(self) -> bool {
        matches!(self, ResourceKind::Esterna)
    }

    /// Key used for per-process lookups (insertion groups, defaults).
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Interna => "interna",
            ResourceKind::Esterna => "esterna",
        }
    }

    /// Tag used in artifact file names.
    pub fn file_tag(self) -> &'static str {
        match self {
            ResourceKind::Interna => "interno",
            ResourceKind::Esterna => "esterno",
        }
    }

    pub fn policy(self) -> IdentifierPolicy {
        IdentifierPolicy {
            is_external: self.is_external(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length limit and suffix rules for account identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierPolicy {
    pub is_external: bool,
}

impl IdentifierPolicy {
    pub fn limit(&self) -> usize {
        if self.is_external {
            EXTERNAL_IDENTIFIER_LIMIT
        } else {
            INTERNAL_IDENTIFIER_LIMIT
        }
    }

    pub fn suffix(&self) -> &'static str {
        if self.is_external { EXTERNAL_SUFFIX } else { "" }
    }
}
