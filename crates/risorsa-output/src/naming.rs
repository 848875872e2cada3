use risorsa_model::{PersonName, ResourceKind, SchemaKind};

/// File name for an artifact: `{Surname}_{FirstInitial}_{tag}.csv`.
///
/// Spaces in the surname become underscores; the tag is `interno`/`esterno`
/// for user records and the lowercase schema name otherwise.
pub fn artifact_file_name(name: &PersonName, kind: ResourceKind, schema: SchemaKind) -> String {
    let surname = name.last.split_whitespace().collect::<Vec<_>>().join("_");
    let initial: String = name.first.trim().chars().take(1).collect();
    let tag = match schema {
        SchemaKind::User => kind.file_tag().to_string(),
        other => other.as_str().to_lowercase(),
    };
    format!("{surname}_{initial}_{tag}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_surname_and_initial() {
        let name = PersonName::new("Anna", "Verdi");
        assert_eq!(
            artifact_file_name(&name, ResourceKind::Interna, SchemaKind::User),
            "Verdi_A_interno.csv"
        );
        assert_eq!(
            artifact_file_name(&name, ResourceKind::Esterna, SchemaKind::User),
            "Verdi_A_esterno.csv"
        );
        assert_eq!(
            artifact_file_name(&name, ResourceKind::Esterna, SchemaKind::Computer),
            "Verdi_A_computer.csv"
        );
    }

    #[test]
    fn compound_surname_uses_underscores() {
        let name = PersonName::new("Élodie", "De Luca");
        assert_eq!(
            artifact_file_name(&name, ResourceKind::Interna, SchemaKind::Profilazione),
            "De_Luca_É_profilazione.csv"
        );
    }
}
