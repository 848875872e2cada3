//! Property tests for the derivation invariants.

use proptest::prelude::*;

use risorsa_core::{generate_identifier, merge_groups, normalize_name_part};
use risorsa_model::{IdentifierPolicy, PersonName};

fn name_part() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z ']{1,24}",
        "[A-Za-zÀÈÉÌÒÙàèéìòùÇçÑñ' ]{1,24}",
    ]
}

fn group_list() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof!["O365 [A-Za-z]{1,8}", "365 [A-Za-z]{1,8}", "GRP_[A-Z]{1,6}", Just(String::new())],
        0..6,
    )
    .prop_map(|tokens| tokens.join(";"))
}

proptest! {
    #[test]
    fn normalized_parts_are_lowercase_ascii(raw in "\\PC{0,32}") {
        let normalized = normalize_name_part(&raw);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn identifier_respects_policy_limit(
        first in name_part(),
        second_first in name_part(),
        last in name_part(),
        second_last in name_part(),
        is_external in any::<bool>(),
    ) {
        let name = PersonName::new(first, last)
            .with_second_first(second_first)
            .with_second_last(second_last);
        let policy = IdentifierPolicy { is_external };
        let identifier = generate_identifier(&name, policy);
        prop_assert!(identifier.ends_with(policy.suffix()));
        prop_assert!(identifier.chars().count() - policy.suffix().len() <= policy.limit());
        prop_assert!(!identifier.is_empty());
    }

    #[test]
    fn merging_a_source_twice_is_idempotent(source in group_list()) {
        let once = merge_groups([source.as_str()]);
        let twice = merge_groups([source.as_str(), source.as_str()]);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(merge_groups([once.as_str()]), once);
    }

    #[test]
    fn merged_groups_have_no_duplicates(a in group_list(), b in group_list()) {
        let merged = merge_groups([a.as_str(), b.as_str()]);
        let tokens: Vec<&str> = merged.split(';').filter(|t| !t.is_empty()).collect();
        let mut unique = tokens.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(tokens.len(), unique.len());
        prop_assert!(tokens.iter().all(|t| !t.starts_with("365 ")));
    }
}
