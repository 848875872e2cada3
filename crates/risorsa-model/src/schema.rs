//! Fixed column layouts of the export records.
//!
//! Column order and count are part of the downstream contract: header and
//! data rows are always produced from the same list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names shared by the schemas.
pub mod columns {
    pub const SAM_ACCOUNT_NAME: &str = "sAMAccountName";
    pub const CREATION: &str = "Creation";
    pub const OU: &str = "OU";
    pub const NAME: &str = "Name";
    pub const DISPLAY_NAME: &str = "DisplayName";
    pub const CN: &str = "cn";
    pub const GIVEN_NAME: &str = "GivenName";
    pub const SURNAME: &str = "Surname";
    pub const EMPLOYEE_NUMBER: &str = "employeeNumber";
    pub const EMPLOYEE_ID: &str = "employeeID";
    pub const DEPARTMENT: &str = "department";
    pub const DESCRIPTION: &str = "Description";
    pub const PASSWORD_NEVER_EXPIRED: &str = "passwordNeverExpired";
    pub const EXPIRE_DATE: &str = "ExpireDate";
    pub const USER_PRINCIPAL_NAME: &str = "userprincipalname";
    pub const MAIL: &str = "mail";
    pub const MOBILE: &str = "mobile";
    pub const GROUP_REMOVAL: &str = "RimozioneGruppo";
    pub const GROUP_INSERTION: &str = "InserimentoGruppo";
    pub const DISABLE: &str = "disable";
    pub const MOVE_TO_OU: &str = "moveToOU";
    pub const TELEPHONE_NUMBER: &str = "telephoneNumber";
    pub const COMPANY: &str = "company";

    pub const COMPUTER: &str = "Computer";
    pub const ADD_MAIL: &str = "add_mail";
    pub const REMOVE_MAIL: &str = "remove_mail";
    pub const ADD_MOBILE: &str = "add_mobile";
    pub const REMOVE_MOBILE: &str = "remove_mobile";
    pub const ADD_USER_PRINCIPAL_NAME: &str = "add_userprincipalname";
    pub const REMOVE_USER_PRINCIPAL_NAME: &str = "remove_userprincipalname";
}

use columns as c;

const USER_COLUMNS: &[&str] = &[
    c::SAM_ACCOUNT_NAME,
    c::CREATION,
    c::OU,
    c::NAME,
    c::DISPLAY_NAME,
    c::CN,
    c::GIVEN_NAME,
    c::SURNAME,
    c::EMPLOYEE_NUMBER,
    c::EMPLOYEE_ID,
    c::DEPARTMENT,
    c::DESCRIPTION,
    c::PASSWORD_NEVER_EXPIRED,
    c::EXPIRE_DATE,
    c::USER_PRINCIPAL_NAME,
    c::MAIL,
    c::MOBILE,
    c::GROUP_REMOVAL,
    c::GROUP_INSERTION,
    c::DISABLE,
    c::MOVE_TO_OU,
    c::TELEPHONE_NUMBER,
    c::COMPANY,
];

const COMPUTER_COLUMNS: &[&str] = &[
    c::COMPUTER,
    c::OU,
    c::ADD_MAIL,
    c::REMOVE_MAIL,
    c::ADD_MOBILE,
    c::REMOVE_MOBILE,
    c::ADD_USER_PRINCIPAL_NAME,
    c::REMOVE_USER_PRINCIPAL_NAME,
    c::DISABLE,
    c::MOVE_TO_OU,
];

/// A fixed, ordered column list.
///
/// `populated` restricts which columns receive values; every other column is
/// emitted empty so the arity never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub populated: Option<&'static [&'static str]>,
}

impl ExportSchema {
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    pub fn populates(&self, column: &str) -> bool {
        match self.populated {
            Some(allowed) => allowed.contains(&column),
            None => true,
        }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

pub const USER_SCHEMA: ExportSchema = ExportSchema {
    name: "User",
    columns: USER_COLUMNS,
    populated: None,
};

pub const COMPUTER_SCHEMA: ExportSchema = ExportSchema {
    name: "Computer",
    columns: COMPUTER_COLUMNS,
    populated: None,
};

pub const PROFILAZIONE_SCHEMA: ExportSchema = ExportSchema {
    name: "Profilazione",
    columns: USER_COLUMNS,
    populated: Some(&[c::SAM_ACCOUNT_NAME, c::GROUP_INSERTION]),
};

/// Export record layouts produced by a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    User,
    Computer,
    Profilazione,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 3] = [
        SchemaKind::User,
        SchemaKind::Computer,
        SchemaKind::Profilazione,
    ];

    pub fn schema(self) -> &'static ExportSchema {
        match self {
            SchemaKind::User => &USER_SCHEMA,
            SchemaKind::Computer => &COMPUTER_SCHEMA,
            SchemaKind::Profilazione => &PROFILAZIONE_SCHEMA,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.schema().name
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_arities() {
        assert_eq!(USER_SCHEMA.arity(), 23);
        assert_eq!(COMPUTER_SCHEMA.arity(), 10);
        assert_eq!(PROFILAZIONE_SCHEMA.columns, USER_SCHEMA.columns);
    }

    #[test]
    fn user_schema_positions() {
        assert_eq!(USER_SCHEMA.position(columns::SAM_ACCOUNT_NAME), Some(0));
        assert_eq!(USER_SCHEMA.position(columns::MOBILE), Some(16));
        assert_eq!(USER_SCHEMA.position(columns::TELEPHONE_NUMBER), Some(21));
        assert_eq!(USER_SCHEMA.position(columns::COMPANY), Some(22));
    }

    #[test]
    fn profilazione_populates_identifier_and_groups_only() {
        assert!(PROFILAZIONE_SCHEMA.populates(columns::SAM_ACCOUNT_NAME));
        assert!(PROFILAZIONE_SCHEMA.populates(columns::GROUP_INSERTION));
        assert!(!PROFILAZIONE_SCHEMA.populates(columns::MAIL));
        assert!(USER_SCHEMA.populates(columns::MAIL));
    }
}
