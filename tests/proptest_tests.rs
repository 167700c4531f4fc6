// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the registry's invariants over arbitrary group and item
//! names and values.

use inicfg::domain::{ConfigError, ConfigValue, ConfigValueType, TypedDocument};
use inicfg::service::ConfigRegistry;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

// Unregistered items fail for every kind
proptest! {
    #[test]
    fn test_unregistered_items_always_fail(group in name(), item in name(), value in any::<i64>()) {
        let mut doc = TypedDocument::new();
        doc.set(&group, item.clone(), ConfigValue::from(value));
        let config = ConfigRegistry::from_document(doc);

        prop_assert!(matches!(config.get_string(&group, &item), Err(ConfigError::NotRegistered { .. })), "expected NotRegistered");
        prop_assert!(matches!(config.get_integer(&group, &item), Err(ConfigError::NotRegistered { .. })), "expected NotRegistered");
        prop_assert!(matches!(config.get_float(&group, &item), Err(ConfigError::NotRegistered { .. })), "expected NotRegistered");
        prop_assert!(matches!(config.get_boolean(&group, &item), Err(ConfigError::NotRegistered { .. })), "expected NotRegistered");
        prop_assert!(matches!(config.get_string_array(&group, &item), Err(ConfigError::NotRegistered { .. })), "expected NotRegistered");
    }
}

// A registered default is returned when the document has no value
proptest! {
    #[test]
    fn test_default_round_trip(group in name(), item in name(), default in "\\PC*") {
        let mut config = ConfigRegistry::new();
        config.register_string(&group, &item, &default, false).unwrap();
        prop_assert_eq!(config.get_string(&group, &item).unwrap(), default);
    }
}

// Document values always win over defaults
proptest! {
    #[test]
    fn test_document_value_wins(item in name(), stored in any::<i64>(), default in any::<i64>()) {
        let mut doc = TypedDocument::new();
        doc.set("DEFAULT", item.clone(), ConfigValue::from(stored));
        let mut config = ConfigRegistry::from_document(doc);

        config.register_integer("DEFAULT", &item, default, false).unwrap();
        prop_assert_eq!(config.get_integer("DEFAULT", &item).unwrap(), stored);
    }
}

// A second registration never changes the declared type or value
proptest! {
    #[test]
    fn test_second_registration_is_noop(item in name(), first in any::<bool>(), second in any::<i64>()) {
        let mut config = ConfigRegistry::new();
        config.register_boolean("g", &item, first, false).unwrap();

        prop_assert!(config.register_boolean("g", &item, !first, false).is_err());
        prop_assert!(config.register_integer("g", &item, second, false).is_err());
        prop_assert_eq!(config.registered_type("g", &item), ConfigValueType::Boolean);
        prop_assert_eq!(config.get_boolean("g", &item).unwrap(), first);
    }
}

// Arrays keep element order and count
proptest! {
    #[test]
    fn test_string_array_preserves_order(items in prop::collection::vec("[a-z]{1,8}", 0..10)) {
        let mut config = ConfigRegistry::new();
        config.register_string_array("g", "list", items.clone(), false).unwrap();
        prop_assert_eq!(config.get_string_array("g", "list").unwrap(), items);
    }
}
