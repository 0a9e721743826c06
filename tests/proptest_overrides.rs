//! Property-based tests using proptest
//!
//! These tests verify the naming transform and the idempotence of the
//! override chain using randomized inputs.

use std::collections::BTreeMap;

use awsjet_config::naming::snake_to_pascal;
use awsjet_config::overrides::{apply_all, default_chain};
use awsjet_config::schema::{Field, FieldType};
use awsjet_config::Resource;
use proptest::prelude::*;

/// Generate a snake_case identifier
fn arb_snake() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..6).prop_map(|words| words.join("_"))
}

/// Generate a field with random flags
fn arb_field() -> impl Strategy<Value = Field> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(required, optional, computed, sensitive)| Field {
            field_type: FieldType::String,
            required,
            optional,
            computed,
            sensitive,
            description: String::new(),
        },
    )
}

/// Generate a resource with a mix of well-known and random field names
fn arb_resource() -> impl Strategy<Value = Resource> {
    let field_name = prop_oneof![
        Just("vpc_id".to_string()),
        Just("subnet_ids".to_string()),
        Just("kms_key_id".to_string()),
        Just("tags_all".to_string()),
        Just("region".to_string()),
        Just("execution_role_arn".to_string()),
        Just("vpc_security_group_ids".to_string()),
        arb_snake(),
    ];
    let name = prop_oneof![
        Just("aws_route_table".to_string()),
        Just("aws_route53_resolver_rule".to_string()),
        Just("aws_iam_role".to_string()),
        Just("aws_cloudtrail".to_string()),
        arb_snake().prop_map(|s| format!("aws_{s}")),
    ];
    (name, prop::collection::btree_map(field_name, arb_field(), 0..10))
        .prop_map(|(name, schema): (String, BTreeMap<String, Field>)| Resource::new_default(&name, schema))
}

proptest! {
    /// Pascal case never contains underscores
    #[test]
    fn pascal_has_no_underscores(s in "[a-z0-9_]{0,40}") {
        prop_assert!(!snake_to_pascal(&s).contains('_'));
    }

    /// Every word starts with an upper-case letter
    #[test]
    fn pascal_capitalizes_leading_letter(s in arb_snake()) {
        let out = snake_to_pascal(&s);
        let first = out.chars().next().unwrap();
        prop_assert!(first.is_ascii_uppercase());
    }

    /// Only underscores are removed
    #[test]
    fn pascal_preserves_letters(s in "[a-z0-9_]{0,40}") {
        let out = snake_to_pascal(&s);
        prop_assert_eq!(out.to_lowercase(), s.replace('_', ""));
    }

    /// Applying the chain twice equals applying it once
    #[test]
    fn chain_is_idempotent(resource in arb_resource()) {
        let chain = default_chain().unwrap();
        let mut once = resource.clone();
        apply_all(&chain, &mut once);
        let mut twice = once.clone();
        apply_all(&chain, &mut twice);
        prop_assert_eq!(once, twice);
    }

    /// References only ever point from settable, non-sensitive fields
    #[test]
    fn references_only_on_settable_fields(resource in arb_resource()) {
        let chain = default_chain().unwrap();
        let mut r = resource;
        apply_all(&chain, &mut r);
        for name in r.references.keys() {
            let field = &r.schema[name];
            prop_assert!(!field.sensitive);
            prop_assert!(!(field.computed && !field.optional));
        }
    }
}
