#![deny(unsafe_code)]

pub mod artifact;
pub mod error;
pub mod naming;
pub mod quote;
pub mod writer;

pub use crate::artifact::Artifact;
pub use crate::error::OutputError;
pub use crate::naming::artifact_file_name;
pub use crate::quote::{DELIMITER, quote_field, quote_row};
pub use crate::writer::{serialize_record, write_artifacts};
