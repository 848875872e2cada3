use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::SchemaKind;

/// Logical column values keyed by column name, independent of any schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    values: BTreeMap<String, String>,
}

impl RecordFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.values.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// One data row laid out according to a schema.
///
/// Values are logical (unquoted); quoting happens only at serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub schema: SchemaKind,
    pub values: Vec<String>,
}

impl ExportRecord {
    /// Lays out `fields` in schema order; missing or non-populated columns are empty.
    pub fn from_fields(kind: SchemaKind, fields: &RecordFields) -> Self {
        let schema = kind.schema();
        let values = schema
            .columns
            .iter()
            .map(|column| {
                if schema.populates(column) {
                    fields.get(column).unwrap_or_default().to_string()
                } else {
                    String::new()
                }
            })
            .collect();
        Self {
            schema: kind,
            values,
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        self.schema.schema().columns
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.schema
            .schema()
            .position(column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    /// (column, value) pairs in schema order.
    pub fn cells(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.header()
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}
