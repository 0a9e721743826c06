//! Cross-resource references for well-known field names

use crate::naming::snake_to_pascal;
use crate::provider::{Extractor, Reference, Resource, DEFAULT_VERSION};

/// Group holding VPCs, subnets and security groups
pub const NETWORKING_GROUP: &str = "ec2";

/// Module whose generated API types references point at
const REFERENCED_MODULE: &str = "github.com/crossplane-contrib/provider-jet-aws";

/// Fully qualified type of `kind` in `group`
pub fn api_type(group: &str, kind: &str) -> String {
    format!("{REFERENCED_MODULE}/apis/{group}/{DEFAULT_VERSION}.{kind}")
}

/// Wire references for fields whose name identifies their target.
///
/// Status and sensitive fields are skipped. Suffix rules run before exact-name
/// rules, and an exact-name rule replaces whatever a suffix rule set.
pub fn add_known_references(r: &mut Resource) {
    let in_networking_group = r.short_group == NETWORKING_GROUP;

    for (name, field) in &r.schema {
        if field.is_status() || field.sensitive {
            continue;
        }
        if let Some(reference) = suffix_reference(name) {
            r.references.insert(name.clone(), reference);
        }
        if let Some(reference) = exact_reference(name, in_networking_group) {
            r.references.insert(name.clone(), reference);
        }
    }
}

fn suffix_reference(field: &str) -> Option<Reference> {
    if field.ends_with("role_arn") {
        return Some(Reference::to(api_type("iam", "Role")).with_extractor(Extractor::ArnPath));
    }
    if field.ends_with("security_group_ids") {
        let camel = snake_to_pascal(field);
        let singular = camel.strip_suffix('s').unwrap_or(camel.as_str());
        return Some(
            Reference::to(api_type(NETWORKING_GROUP, "SecurityGroup"))
                .with_field_names(format!("{singular}Refs"), format!("{singular}Selector")),
        );
    }
    None
}

fn exact_reference(field: &str, in_networking_group: bool) -> Option<Reference> {
    // The reference generator cannot resolve a fully qualified path pointing
    // at its own group, so same-group targets use the bare kind.
    let networking = |kind: &str| {
        if in_networking_group {
            kind.to_string()
        } else {
            api_type(NETWORKING_GROUP, kind)
        }
    };

    let reference = match field {
        "vpc_id" => Reference::to(networking("VPC")).with_field_names("VpcIdRef", "VpcIdSelector"),
        "subnet_ids" => Reference::to(networking("Subnet"))
            .with_field_names("SubnetIdRefs", "SubnetIdSelector"),
        "subnet_id" => Reference::to(api_type(NETWORKING_GROUP, "Subnet")),
        "security_group_id" => Reference::to(api_type(NETWORKING_GROUP, "SecurityGroup")),
        "kms_key_id" | "kms_key_arn" | "kms_key" => Reference::to(api_type("kms", "Key")),
        _ => return None,
    };
    Some(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldType};
    use std::collections::BTreeMap;

    fn optional(sensitive: bool) -> Field {
        Field {
            field_type: FieldType::String,
            required: false,
            optional: true,
            computed: false,
            sensitive,
            description: String::new(),
        }
    }

    fn resource(group: &str, fields: &[(&str, Field)]) -> Resource {
        let schema: BTreeMap<String, Field> = fields
            .iter()
            .map(|(k, f)| (k.to_string(), f.clone()))
            .collect();
        let mut r = Resource::new_default("aws_test_thing", schema);
        r.short_group = group.to_string();
        r
    }

    #[test]
    fn test_role_arn_suffix() {
        let mut r = resource("lambda", &[("execution_role_arn", optional(false))]);
        add_known_references(&mut r);
        let reference = &r.references["execution_role_arn"];
        assert_eq!(reference.target_type, api_type("iam", "Role"));
        assert_eq!(reference.extractor, Some(Extractor::ArnPath));
        assert_eq!(reference.ref_field_name, None);
    }

    #[test]
    fn test_security_group_ids_suffix_field_names() {
        // Deliberately the Pascal case of the whole field minus one trailing `s`, so `Id` stays.
        let mut r = resource("rds", &[("db_security_group_ids", optional(false))]);
        add_known_references(&mut r);
        let reference = &r.references["db_security_group_ids"];
        assert_eq!(reference.target_type, api_type("ec2", "SecurityGroup"));
        assert_eq!(reference.ref_field_name.as_deref(), Some("DbSecurityGroupIdRefs"));
        assert_eq!(
            reference.selector_field_name.as_deref(),
            Some("DbSecurityGroupIdSelector")
        );
    }

    #[test]
    fn test_vpc_id_short_type_in_networking_group() {
        let mut r = resource("ec2", &[("vpc_id", optional(false))]);
        add_known_references(&mut r);
        let reference = &r.references["vpc_id"];
        assert_eq!(reference.target_type, "VPC");
        assert_eq!(reference.ref_field_name.as_deref(), Some("VpcIdRef"));
        assert_eq!(reference.selector_field_name.as_deref(), Some("VpcIdSelector"));
    }

    #[test]
    fn test_vpc_id_qualified_type_elsewhere() {
        let mut r = resource("route53resolver", &[("vpc_id", optional(false))]);
        add_known_references(&mut r);
        assert_eq!(
            r.references["vpc_id"].target_type,
            "github.com/crossplane-contrib/provider-jet-aws/apis/ec2/v1alpha2.VPC"
        );
    }

    #[test]
    fn test_subnet_ids_follows_group_rule() {
        let mut r = resource("ec2", &[("subnet_ids", optional(false))]);
        add_known_references(&mut r);
        assert_eq!(r.references["subnet_ids"].target_type, "Subnet");
        assert_eq!(
            r.references["subnet_ids"].ref_field_name.as_deref(),
            Some("SubnetIdRefs")
        );

        let mut r = resource("vpc", &[("subnet_ids", optional(false))]);
        add_known_references(&mut r);
        assert_eq!(r.references["subnet_ids"].target_type, api_type("ec2", "Subnet"));
    }

    #[test]
    fn test_singular_networking_fields_always_qualified() {
        let mut r = resource(
            "ec2",
            &[("subnet_id", optional(false)), ("security_group_id", optional(false))],
        );
        add_known_references(&mut r);
        assert_eq!(r.references["subnet_id"].target_type, api_type("ec2", "Subnet"));
        assert_eq!(
            r.references["security_group_id"].target_type,
            api_type("ec2", "SecurityGroup")
        );
    }

    #[test]
    fn test_kms_fields() {
        let mut r = resource(
            "cloudtrail",
            &[
                ("kms_key_id", optional(false)),
                ("kms_key_arn", optional(false)),
                ("kms_key", optional(false)),
            ],
        );
        add_known_references(&mut r);
        assert_eq!(r.references.len(), 3);
        assert!(r.references.values().all(|x| x.target_type == api_type("kms", "Key")));
    }

    #[test]
    fn test_bare_security_group_ids_uses_suffix_rule() {
        let mut r = resource("lambda", &[("security_group_ids", optional(false))]);
        add_known_references(&mut r);
        assert_eq!(
            r.references["security_group_ids"].ref_field_name.as_deref(),
            Some("SecurityGroupIdRefs")
        );
    }

    #[test]
    fn test_sensitive_and_status_fields_skipped() {
        let mut status = optional(false);
        status.optional = false;
        status.computed = true;
        let mut r = resource(
            "ec2",
            &[("vpc_id", status), ("kms_key_id", optional(true))],
        );
        add_known_references(&mut r);
        assert!(r.references.is_empty());
    }

    #[test]
    fn test_unrelated_fields_untouched() {
        let mut r = resource("ec2", &[("cidr_block", optional(false))]);
        add_known_references(&mut r);
        assert!(r.references.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut r = resource(
            "rds",
            &[("vpc_security_group_ids", optional(false)), ("vpc_id", optional(false))],
        );
        add_known_references(&mut r);
        let once = r.clone();
        add_known_references(&mut r);
        assert_eq!(r, once);
    }
}
