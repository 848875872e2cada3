//! Account identifier (sAMAccountName) generation.
//!
//! Candidates are tried from the most to the least information-preserving:
//!
//! - `A`: full first names, full surnames (`mariololuigi.rossibianchi`)
//! - `B`: initials of the first names, full surnames (`ml.rossibianchi`)
//! - `C`: initials, first surname only, cut to the policy limit
//!
//! Uniqueness against existing accounts is not checked here; a truncated
//! candidate `C` can collide with another person's identifier.

use std::fmt;

use risorsa_model::{IdentifierPolicy, PersonName};
use tracing::debug;

use crate::normalize::{initial, normalize_name_part};

/// Which candidate produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateTier {
    FullNames,
    Initials,
    Truncated,
}

impl fmt::Display for CandidateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CandidateTier::FullNames => "full-names",
            CandidateTier::Initials => "initials",
            CandidateTier::Truncated => "truncated",
        };
        f.write_str(label)
    }
}

/// A generated identifier and the candidate it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentifier {
    pub value: String,
    pub tier: CandidateTier,
}

impl AccountIdentifier {
    /// Derives the identifier for `name` under `policy`.
    pub fn derive(name: &PersonName, policy: IdentifierPolicy) -> Self {
        let first = normalize_name_part(&name.first);
        let second_first = normalize_name_part(&name.second_first);
        let last = normalize_name_part(&name.last);
        let second_last = normalize_name_part(&name.second_last);
        let limit = policy.limit();
        let suffix = policy.suffix();

        let full = format!("{first}{second_first}.{last}{second_last}");
        if full.chars().count() <= limit {
            return Self::finish(full, suffix, CandidateTier::FullNames);
        }

        let initials = format!("{}{}", initial(&first), initial(&second_first));
        let short = format!("{initials}.{last}{second_last}");
        if short.chars().count() <= limit {
            return Self::finish(short, suffix, CandidateTier::Initials);
        }

        let truncated: String = format!("{initials}.{last}").chars().take(limit).collect();
        Self::finish(truncated, suffix, CandidateTier::Truncated)
    }

    fn finish(mut value: String, suffix: &str, tier: CandidateTier) -> Self {
        debug!(%tier, length = value.chars().count(), "identifier candidate selected");
        value.push_str(suffix);
        Self { value, tier }
    }
}

/// Generates the account identifier for `name`; see [`AccountIdentifier::derive`].
pub fn generate_identifier(name: &PersonName, policy: IdentifierPolicy) -> String {
    AccountIdentifier::derive(name, policy).value
}
