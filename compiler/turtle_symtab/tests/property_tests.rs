//! Property-based tests for the AVL symbol table.
//!
//! For arbitrary insertion sequences:
//! 1. Every node stays balanced after every insertion
//! 2. In-order iteration is sorted and holds each distinct key once
//! 3. A key found after insertion resolves to the entry insertion returned

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeSet;

use proptest::prelude::*;
use turtle_symtab::{FindMode, Slot, SymbolTable};

/// Short identifiers so that duplicates are common.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E_][a-e0-9]{0,2}").expect("valid regex")
}

proptest! {
    #[test]
    fn balanced_after_every_insert(keys in prop::collection::vec(key_strategy(), 0..200)) {
        let mut table: SymbolTable<f64> = SymbolTable::new();
        for key in &keys {
            table.insert(key).unwrap();
            prop_assert!(table.check_invariants(), "unbalanced after inserting {key}");
        }
    }

    #[test]
    fn iteration_sorted_and_deduplicated(keys in prop::collection::vec(key_strategy(), 0..200)) {
        let mut table: SymbolTable<u8> = SymbolTable::new();
        for key in &keys {
            table.insert(key).unwrap();
        }
        let expected: Vec<&str> = keys.iter().map(String::as_str).collect::<BTreeSet<_>>().into_iter().collect();
        let actual: Vec<&str> = table.iter().map(|(_, key, _)| key).collect();
        prop_assert_eq!(table.len(), expected.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn permutations_build_equivalent_tables(
        keys in prop::collection::btree_set(key_strategy(), 1..64).prop_map(|set| set.into_iter().collect::<Vec<_>>()).prop_shuffle()
    ) {
        let mut shuffled: SymbolTable<f64> = SymbolTable::new();
        for key in &keys {
            shuffled.insert(key).unwrap();
        }
        let mut sorted_keys = keys.clone();
        sorted_keys.sort();
        let mut sorted: SymbolTable<f64> = SymbolTable::new();
        for key in &sorted_keys {
            sorted.insert(key).unwrap();
        }
        let a: Vec<&str> = shuffled.iter().map(|(_, key, _)| key).collect();
        let b: Vec<&str> = sorted.iter().map(|(_, key, _)| key).collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(shuffled.len(), keys.len());
    }

    #[test]
    fn find_after_insert_resolves_to_same_entry(keys in prop::collection::vec(key_strategy(), 1..100)) {
        let mut table: SymbolTable<f64> = SymbolTable::new();
        for key in &keys {
            let inserted = table.insert(key).unwrap();
            let found = table.find_or_insert(key, FindMode::LookupOnly).unwrap();
            prop_assert_eq!(found, Some(Slot::Existing(inserted.id())));
            let again = table.find_or_insert(key, FindMode::InsertIfAbsent).unwrap();
            prop_assert_eq!(again, Some(Slot::Existing(inserted.id())));
        }
    }
}
