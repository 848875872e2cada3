pub mod config;
pub mod form;
pub mod person;
pub mod record;
pub mod schema;

pub use config::{EngineConfig, OuOption};
pub use form::ResourceForm;
pub use person::{IdentifierPolicy, PersonName, ResourceKind};
pub use record::{ExportRecord, RecordFields};
pub use schema::{ExportSchema, SchemaKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_schema_arity() {
        let mut fields = RecordFields::new();
        fields.set(schema::columns::SAM_ACCOUNT_NAME, "anna.verdi");
        let record = ExportRecord::from_fields(SchemaKind::Computer, &fields);
        assert_eq!(record.values.len(), 10);
        assert_eq!(record.header().len(), record.values.len());
    }

    #[test]
    fn record_serializes() {
        let mut fields = RecordFields::new();
        fields.set(schema::columns::SAM_ACCOUNT_NAME, "anna.verdi");
        let record = ExportRecord::from_fields(SchemaKind::Profilazione, &fields);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ExportRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.schema, SchemaKind::Profilazione);
        assert_eq!(round.values[0], "anna.verdi");
    }
}
