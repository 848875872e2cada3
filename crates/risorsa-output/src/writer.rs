//! Delimited writer for the import artifacts.
//!
//! Quoting is applied by [`quote_field`](crate::quote::quote_field) before
//! writing; the CSV writer runs with quoting disabled so pre-quoted fields
//! reach the file byte for byte.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info};

use risorsa_model::ExportRecord;

use crate::artifact::Artifact;
use crate::error::OutputError;
use crate::quote::{DELIMITER, quote_row};

/// Serializes a record as a header line followed by its data line (CRLF ends).
pub fn serialize_record(record: &ExportRecord) -> Result<String, OutputError> {
    let schema = record.schema.schema();
    if record.values.len() != schema.arity() {
        return Err(OutputError::ArityMismatch {
            schema: schema.name.to_string(),
            expected: schema.arity(),
            actual: record.values.len(),
        });
    }
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER as u8)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer
        .write_record(schema.columns)
        .map_err(|e| csv_error(schema.name, &e))?;
    writer
        .write_record(quote_row(&record.values))
        .map_err(|e| csv_error(schema.name, &e))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv_error(schema.name, e.error()))?;
    String::from_utf8(bytes).map_err(|e| csv_error(schema.name, &e))
}

fn csv_error(schema: &str, error: &dyn Display) -> OutputError {
    OutputError::Csv {
        schema: schema.to_string(),
        message: error.to_string(),
    }
}

/// Writes each artifact's payload into `output_dir`, creating it if needed.
pub fn write_artifacts(
    output_dir: &Path,
    artifacts: &[Artifact],
) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::io(output_dir, e))?;
    let mut paths = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = output_dir.join(&artifact.file_name);
        std::fs::write(&path, artifact.payload.as_bytes())
            .map_err(|e| OutputError::io(&path, e))?;
        debug!(schema = %artifact.schema, path = %path.display(), "artifact written");
        paths.push(path);
    }
    info!(
        output_dir = %output_dir.display(),
        file_count = paths.len(),
        "artifacts written"
    );
    Ok(paths)
}
