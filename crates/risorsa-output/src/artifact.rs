use serde::Serialize;

use risorsa_model::{ExportRecord, PersonName, ResourceKind, SchemaKind};

use crate::error::OutputError;
use crate::naming::artifact_file_name;
use crate::quote::quote_row;
use crate::writer::serialize_record;

/// A serialized record ready for preview and download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub schema: SchemaKind,
    pub file_name: String,
    pub header: Vec<String>,
    /// Data row with quoting already applied.
    pub row: Vec<String>,
    /// Header line and data line as written to disk.
    pub payload: String,
}

impl Artifact {
    pub fn from_record(
        record: &ExportRecord,
        name: &PersonName,
        kind: ResourceKind,
    ) -> Result<Self, OutputError> {
        Ok(Self {
            schema: record.schema,
            file_name: artifact_file_name(name, kind, record.schema),
            header: record.header().iter().map(|c| (*c).to_string()).collect(),
            row: quote_row(&record.values),
            payload: serialize_record(record)?,
        })
    }
}
