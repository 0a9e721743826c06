//! Group and kind overrides
//!
//! Default grouping takes the second word of a resource name as its API group.
//! That is wrong for a handful of AWS resources whose service name spans
//! several words, or whose kind cannot be derived from the name at all. The
//! tables below list those exceptions.
//!
//! The group table follows the service grouping of the Terraform AWS provider
//! (`internal/service/<name>`), which in turn follows the AWS Go SDK.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::naming::words_to_pascal;

/// Terraform vendor prefix stripped before computing kinds
pub const TERRAFORM_PREFIX: &str = "aws_";

/// Strategy computing the group and kind of one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOverride {
    /// Force `group` and drop the first `drop` words of the name (after the
    /// vendor prefix) before deriving the kind
    ReplaceGroupWords { group: &'static str, drop: usize },
}

impl GroupOverride {
    /// Compute `(group, kind)` for `resource`
    pub fn apply(&self, resource: &str) -> (String, String) {
        match *self {
            GroupOverride::ReplaceGroupWords { group, drop } => {
                // aws_route53_resolver_rule with (route53resolver, 2) -> (route53resolver, Rule)
                let trimmed = resource.strip_prefix(TERRAFORM_PREFIX).unwrap_or(resource);
                let words: Vec<&str> = trimmed.split('_').collect();
                (group.to_string(), words_to_pascal(&words, drop))
            }
        }
    }
}

static GROUP_MAP: OnceLock<HashMap<&'static str, GroupOverride>> = OnceLock::new();
static KIND_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Resources whose group differs from the default
pub fn group_map() -> &'static HashMap<&'static str, GroupOverride> {
    GROUP_MAP.get_or_init(|| {
        use GroupOverride::ReplaceGroupWords;
        HashMap::from([
            (
                "aws_route53_resolver_rule",
                ReplaceGroupWords { group: "route53resolver", drop: 2 },
            ),
            (
                "aws_route53_resolver_rule_association",
                ReplaceGroupWords { group: "route53resolver", drop: 2 },
            ),
            ("aws_route_table", ReplaceGroupWords { group: "ec2", drop: 0 }),
        ])
    })
}

/// Resources whose kind is spelled out instead of derived
pub fn kind_map() -> &'static HashMap<&'static str, &'static str> {
    KIND_MAP.get_or_init(|| {
        HashMap::from([
            ("aws_autoscaling_group", "AutoscalingGroup"),
            ("aws_cloudformation_type", "CloudFormationType"),
            (
                "aws_config_configuration_recorder_status",
                "AWSConfigurationRecorderStatus",
            ),
            ("aws_cloudtrail", "Trail"),
        ])
    })
}

/// Override found for a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKind {
    /// `None` leaves the current group alone
    pub group: Option<String>,
    pub kind: String,
}

/// Look up the group/kind override for `resource`, if any.
///
/// The group table is consulted first; the kind table only supplies a kind.
pub fn resolve_group_kind(resource: &str) -> Option<GroupKind> {
    if let Some(calc) = group_map().get(resource) {
        let (group, kind) = calc.apply(resource);
        return Some(GroupKind {
            group: Some(group),
            kind,
        });
    }
    kind_map().get(resource).map(|kind| GroupKind {
        group: None,
        kind: kind.to_string(),
    })
}
