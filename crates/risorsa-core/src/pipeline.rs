//! One submission, end to end: prepare → derive → merge → assemble.

use risorsa_model::{
    EngineConfig, ExportRecord, PersonName, RecordFields, ResourceForm, SchemaKind,
};
use tracing::{debug, info_span};

use crate::assembler::{DerivedValues, assemble_fields, assemble_record};
use crate::display_name::display_name_for;
use crate::groups::GroupPolicy;
use crate::identifier::AccountIdentifier;
use crate::normalize::capitalize_part;

/// Everything derived from one form submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The form with display-cased name parts.
    pub form: ResourceForm,
    pub identifier: AccountIdentifier,
    pub display_name: String,
    pub groups: String,
    pub fields: RecordFields,
    /// Records in the requested schema order.
    pub records: Vec<ExportRecord>,
}

impl Submission {
    pub fn record(&self, kind: SchemaKind) -> Option<&ExportRecord> {
        self.records.iter().find(|record| record.schema == kind)
    }
}

/// Trims and capitalizes every name part the way the form displays them.
pub fn prepare_name(name: &PersonName) -> PersonName {
    PersonName {
        first: capitalize_part(&name.first),
        second_first: capitalize_part(&name.second_first),
        last: capitalize_part(&name.last),
        second_last: capitalize_part(&name.second_last),
    }
}

/// Runs the full derivation for one submission using the default group policy.
pub fn generate(form: &ResourceForm, config: &EngineConfig, schemas: &[SchemaKind]) -> Submission {
    generate_with_policy(form, config, &GroupPolicy::from_config(config), schemas)
}

/// Runs the full derivation with an explicit group policy.
pub fn generate_with_policy(
    form: &ResourceForm,
    config: &EngineConfig,
    policy: &GroupPolicy<'_>,
    schemas: &[SchemaKind],
) -> Submission {
    let span = info_span!("generate", kind = %form.kind, schemas = schemas.len());
    let _guard = span.enter();

    let form = ResourceForm {
        name: prepare_name(&form.name),
        ..form.clone()
    };
    let is_external = form.kind.is_external();
    let identifier = AccountIdentifier::derive(&form.name, form.kind.policy());
    let display_name = display_name_for(&form.name, is_external);
    let groups = policy.merge(form.process_key());
    debug!(
        tier = %identifier.tier,
        group_count = groups.split(';').filter(|g| !g.is_empty()).count(),
        process = form.process_key(),
        "derived identity values"
    );

    let derived = DerivedValues {
        identifier: identifier.value.clone(),
        display_name: display_name.clone(),
        groups: groups.clone(),
    };
    let fields = assemble_fields(&form, config, &derived);
    let records = schemas
        .iter()
        .map(|kind| assemble_record(*kind, &fields))
        .collect();

    Submission {
        form,
        identifier,
        display_name,
        groups,
        fields,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risorsa_model::ResourceKind;

    #[test]
    fn capitalizes_before_deriving() {
        let form = ResourceForm::new(
            PersonName::new("  anna ", "VERDI").with_second_last("de luca"),
            ResourceKind::Interna,
        );
        let submission = generate(&form, &EngineConfig::default(), &[SchemaKind::User]);
        assert_eq!(submission.form.name.first, "Anna");
        assert_eq!(submission.display_name, "Verdi De luca Anna");
        assert_eq!(submission.identifier.value, "anna.verdideluca");
    }

    #[test]
    fn records_follow_requested_order() {
        let form = ResourceForm::new(PersonName::new("Anna", "Verdi"), ResourceKind::Interna);
        let submission = generate(
            &form,
            &EngineConfig::default(),
            &[SchemaKind::Profilazione, SchemaKind::User],
        );
        let kinds: Vec<_> = submission.records.iter().map(|r| r.schema).collect();
        assert_eq!(kinds, vec![SchemaKind::Profilazione, SchemaKind::User]);
        assert!(submission.record(SchemaKind::Computer).is_none());
    }
}
