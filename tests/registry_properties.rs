//! Property tests for registry merge semantics

use phrasebook::{LanguageRegistry, LookupMode, TranslationTable};
use proptest::prelude::*;
use std::collections::HashMap;

fn to_table(entries: &HashMap<String, String>) -> TranslationTable {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

proptest! {
    /// Merging disjoint tables commutes: the resulting language table is the
    /// same regardless of registration order.
    #[test]
    fn disjoint_merges_commute(
        left in prop::collection::hash_map("[a-m]{1,8}", ".{0,12}", 0..8),
        right in prop::collection::hash_map("[n-z]{1,8}", ".{0,12}", 0..8),
    ) {
        let mut forward = LanguageRegistry::new();
        forward.add_language("en", to_table(&left));
        forward.add_language("en", to_table(&right));

        let mut reverse = LanguageRegistry::new();
        reverse.add_language("en", to_table(&right));
        reverse.add_language("en", to_table(&left));

        prop_assert_eq!(forward.table("en"), reverse.table("en"));
    }

    /// Re-adding identical content is a no-op.
    #[test]
    fn identical_readd_is_idempotent(
        entries in prop::collection::hash_map("[a-z]{1,8}", ".{0,12}", 0..8),
    ) {
        let mut once = LanguageRegistry::new();
        once.add_language("en", to_table(&entries));

        let mut twice = LanguageRegistry::new();
        twice.add_language("en", to_table(&entries));
        twice.add_language("en", to_table(&entries));

        prop_assert_eq!(once.table("en"), twice.table("en"));
    }

    /// Conflicting keys take the later value; unrelated keys survive.
    #[test]
    fn conflicting_merge_is_last_write_wins(
        key in "[a-z]{1,8}",
        first in ".{1,12}",
        second in ".{1,12}",
        unrelated in ".{1,12}",
    ) {
        let mut registry = LanguageRegistry::new();

        let mut initial = TranslationTable::new();
        initial.insert(key.clone(), first);
        initial.insert(format!("{key}_kept"), unrelated.clone());
        registry.add_language("en", initial);

        let mut overwrite = TranslationTable::new();
        overwrite.insert(key.clone(), second.clone());
        registry.add_language("en", overwrite);

        let table = registry.table("en").unwrap();
        prop_assert_eq!(table.get(&key, LookupMode::Flat), Some(second.as_str()));
        prop_assert_eq!(
            table.get(&format!("{key}_kept"), LookupMode::Flat),
            Some(unrelated.as_str())
        );
    }
}
