use serde::{Deserialize, Serialize};

use crate::person::{PersonName, ResourceKind};

/// Field values collected by the form for one submission.
///
/// Values are stored as typed; trimming, casing and defaulting happen in the
/// engine so the same form can be replayed against different configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceForm {
    pub name: PersonName,
    #[serde(default)]
    pub kind: ResourceKind,
    /// Matricola.
    #[serde(default)]
    pub employee_id: String,
    /// Codice fiscale, exported as `employeeNumber`.
    #[serde(default)]
    pub fiscal_code: String,
    /// Division/area acronym.
    #[serde(default)]
    pub department: String,
    /// Mobile number without the `+39` prefix.
    #[serde(default)]
    pub mobile: String,
    /// Workstation name, exported as `Description`.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resident: bool,
    /// Landline without the `+39` prefix; only used for residents.
    #[serde(default)]
    pub landline: String,
    /// Selected OU option key; the configured default applies when absent.
    #[serde(default)]
    pub ou_key: Option<String>,
    /// Selector for the insertion-group table; defaults to the resource kind.
    #[serde(default)]
    pub process: Option<String>,
    /// Contract end date (`dd-mm-yyyy` or `dd/mm/yyyy`), external resources only.
    #[serde(default)]
    pub expire_date: String,
}

impl ResourceForm {
    pub fn new(name: PersonName, kind: ResourceKind) -> Self {
        Self {
            name,
            kind,
            ..Self::default()
        }
    }

    /// Key used to pick the process-specific group source.
    pub fn process_key(&self) -> &str {
        self.process
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.kind.as_str())
    }
}
