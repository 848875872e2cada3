//! Maps derived values and form fields onto export records.
//!
//! All schemas are filled from one [`RecordFields`] set; each schema picks
//! its own columns, so adding a layout only means declaring its column list.

use risorsa_model::schema::columns as col;
use risorsa_model::{EngineConfig, ExportRecord, RecordFields, ResourceForm, SchemaKind};

use crate::dates::format_expire_date;
use crate::display_name::strip_external_marker;

/// Value of the `Creation` column for new accounts.
pub const CREATION_FLAG: &str = "SI";

/// Value of the `passwordNeverExpired` column.
pub const PASSWORD_NEVER_EXPIRED: &str = "No";

/// Workstation placeholder used when the form leaves the PC name blank.
pub const DESCRIPTION_PLACEHOLDER: &str = "<PC>";

/// International prefix prepended to phone numbers.
pub const PHONE_PREFIX: &str = "+39";

pub const DEFAULT_MAIL_DOMAIN: &str = "consip.it";

/// Values computed by the engine before record assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedValues {
    pub identifier: String,
    pub display_name: String,
    /// Merged group-membership list.
    pub groups: String,
}

/// Builds the logical column values shared by every schema.
///
/// `form` is expected to carry display-cased name parts.
pub fn assemble_fields(
    form: &ResourceForm,
    config: &EngineConfig,
    derived: &DerivedValues,
) -> RecordFields {
    let name = &form.name;
    let kind = form.kind;
    let ou_value = config
        .resolve_ou(form.ou_key.as_deref())
        .map(|ou| ou.label.clone())
        .unwrap_or_default();
    let mail = mail_address(&derived.identifier, config);
    let mobile = prefixed_phone(&compact_phone(&form.mobile));
    let description = non_empty_or(&form.description, DESCRIPTION_PLACEHOLDER);

    let mut fields = RecordFields::new();
    fields.set(col::SAM_ACCOUNT_NAME, derived.identifier.as_str());
    fields.set(col::CREATION, CREATION_FLAG);
    fields.set(col::OU, ou_value);
    fields.set(col::NAME, strip_external_marker(&derived.display_name));
    fields.set(col::DISPLAY_NAME, derived.display_name.as_str());
    fields.set(col::CN, derived.display_name.as_str());
    fields.set(col::GIVEN_NAME, join_parts(&name.first, &name.second_first));
    fields.set(col::SURNAME, join_parts(&name.last, &name.second_last));
    fields.set(col::EMPLOYEE_NUMBER, form.fiscal_code.trim());
    fields.set(
        col::EMPLOYEE_ID,
        non_empty_or(
            &form.employee_id,
            config.default_value("employee_id_default").unwrap_or_default(),
        ),
    );
    fields.set(
        col::DEPARTMENT,
        non_empty_or(
            &form.department,
            config.default_value("department_default").unwrap_or_default(),
        ),
    );
    fields.set(col::DESCRIPTION, description.as_str());
    fields.set(col::PASSWORD_NEVER_EXPIRED, PASSWORD_NEVER_EXPIRED);
    if kind.is_external() {
        fields.set(col::EXPIRE_DATE, format_expire_date(&form.expire_date));
    }
    fields.set(col::USER_PRINCIPAL_NAME, mail.as_str());
    fields.set(col::MAIL, mail.as_str());
    fields.set(col::MOBILE, mobile.as_str());
    fields.set(col::GROUP_INSERTION, derived.groups.as_str());
    fields.set(col::TELEPHONE_NUMBER, telephone_number(form, config));
    fields.set(
        col::COMPANY,
        config.default_or(&format!("company_{}", kind.as_str()), ""),
    );

    fields.set(col::COMPUTER, description);
    fields.set(col::ADD_MAIL, mail.as_str());
    fields.set(col::ADD_MOBILE, mobile);
    fields.set(col::ADD_USER_PRINCIPAL_NAME, mail);
    fields
}

pub fn assemble_record(kind: SchemaKind, fields: &RecordFields) -> ExportRecord {
    ExportRecord::from_fields(kind, fields)
}

/// `identifier@domain`, with the domain taken from `mail_domain`.
pub fn mail_address(identifier: &str, config: &EngineConfig) -> String {
    format!(
        "{identifier}@{}",
        config.default_or("mail_domain", DEFAULT_MAIL_DOMAIN)
    )
}

/// `+39 <number>`, or empty when there is no number.
pub fn prefixed_phone(number: &str) -> String {
    if number.is_empty() {
        String::new()
    } else {
        format!("{PHONE_PREFIX} {number}")
    }
}

/// Removes every whitespace character from a typed phone number.
pub fn compact_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn telephone_number(form: &ResourceForm, config: &EngineConfig) -> String {
    let landline = form.landline.trim();
    if form.resident && !landline.is_empty() {
        return prefixed_phone(landline);
    }
    config.default_or(&format!("telephone_{}", form.kind.as_str()), "")
}

fn join_parts(primary: &str, secondary: &str) -> String {
    format!("{} {}", primary.trim(), secondary.trim())
        .trim()
        .to_string()
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
