//! Derivation engine for new-resource provisioning.
//!
//! Every function here is total: missing parts contribute empty values,
//! malformed group tokens are repaired and over-long identifiers are
//! truncated. Nothing in this crate performs I/O.

pub mod assembler;
pub mod dates;
pub mod display_name;
pub mod groups;
pub mod identifier;
pub mod mail;
pub mod normalize;
pub mod pipeline;

pub use assembler::{DerivedValues, assemble_fields, assemble_record};
pub use dates::format_expire_date;
pub use display_name::{EXTERNAL_MARKER, build_display_name, strip_external_marker};
pub use groups::{GroupPolicy, GroupSource, merge_groups, repair_token};
pub use identifier::{AccountIdentifier, CandidateTier, generate_identifier};
pub use mail::build_mail_template;
pub use normalize::{capitalize_part, normalize_name_part};
pub use pipeline::{Submission, generate};
