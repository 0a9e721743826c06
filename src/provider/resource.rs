//! Resource descriptor handed to the code generator

use std::collections::BTreeMap;

use serde::Serialize;

use crate::naming::{snake_to_pascal, words_to_pascal};
use crate::schema::Field;

/// API version every generated kind starts at
pub const DEFAULT_VERSION: &str = "v1alpha2";

/// How the cloud identifier of a resource is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalNameStrategy {
    /// The `name` argument is the identifier
    NameAsIdentifier,
    /// The provider assigns the identifier; read it back from state
    IdentifierFromProvider,
}

/// External-name configuration of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalName {
    pub strategy: ExternalNameStrategy,
    /// Fields left out of the generated parameters because the external
    /// name already covers them
    pub omitted_fields: Vec<String>,
}

impl ExternalName {
    pub fn name_as_identifier() -> Self {
        Self {
            strategy: ExternalNameStrategy::NameAsIdentifier,
            omitted_fields: vec!["name".to_string()],
        }
    }

    pub fn identifier_from_provider() -> Self {
        Self {
            strategy: ExternalNameStrategy::IdentifierFromProvider,
            omitted_fields: Vec::new(),
        }
    }

    /// Add `field` to the omitted fields. Returns false if it was already there.
    pub fn omit(&mut self, field: &str) -> bool {
        if self.omitted_fields.iter().any(|f| f == field) {
            return false;
        }
        self.omitted_fields.push(field.to_string());
        true
    }
}

/// How a referenced resource's value is extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extractor {
    /// Use the ARN from the referenced resource's status
    ArnPath,
}

/// A field whose value can be resolved from another managed resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Target kind, either short (same API group) or fully qualified
    #[serde(rename = "type")]
    pub target_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor: Option<Extractor>,
}

impl Reference {
    pub fn to(target_type: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            ref_field_name: None,
            selector_field_name: None,
            extractor: None,
        }
    }

    pub fn with_field_names(mut self, ref_field: impl Into<String>, selector: impl Into<String>) -> Self {
        self.ref_field_name = Some(ref_field.into());
        self.selector_field_name = Some(selector.into());
        self
    }

    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = Some(extractor);
        self
    }
}

/// One Terraform resource pending translation into an API kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// Terraform resource type, e.g. `aws_route_table`
    pub name: String,
    pub short_group: String,
    pub kind: String,
    pub version: String,
    pub external_name: ExternalName,
    pub schema: BTreeMap<String, Field>,
    pub references: BTreeMap<String, Reference>,
}

impl Resource {
    /// Descriptor with the generator's default naming and no overrides applied
    pub fn new_default(name: &str, schema: BTreeMap<String, Field>) -> Self {
        let (short_group, kind) = default_group_kind(name);
        Self {
            name: name.to_string(),
            short_group,
            kind,
            version: DEFAULT_VERSION.to_string(),
            external_name: ExternalName::name_as_identifier(),
            schema,
            references: BTreeMap::new(),
        }
    }
}

/// Group and kind inferred from the resource name alone.
///
/// `aws_rds_cluster_parameter_group` gives `(rds, ClusterParameterGroup)`;
/// two-word names such as `aws_cloudtrail` fall back to the vendor word as the
/// group.
pub fn default_group_kind(name: &str) -> (String, String) {
    let words: Vec<&str> = name.split('_').collect();
    match words.as_slice() {
        [_, group, _, ..] => (group.to_string(), words_to_pascal(&words, 2)),
        [vendor, kind] => (vendor.to_string(), snake_to_pascal(kind)),
        _ => (name.to_string(), snake_to_pascal(name)),
    }
}
