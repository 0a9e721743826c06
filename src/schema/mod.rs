//! Provider schema document
//!
//! Models the output of `terraform providers schema -json`. The AWS schema the
//! generator works from is embedded at compile time from `src/schemas/`, the
//! same way other static definitions are compiled into the binary, so a
//! generation run never touches the network.

mod types;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

pub use types::{Field, FieldType, NestingMode};

/// Embedded provider schema (compiled into the binary)
const EMBEDDED_SCHEMA: &str = include_str!("../schemas/aws.json");

/// Get the embedded provider schema document
pub fn embedded() -> &'static str {
    EMBEDDED_SCHEMA
}

/// Root of a provider schema document
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSchemaDocument {
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub provider_schemas: BTreeMap<String, ProviderSchema>,
}

/// Schemas exported by one provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, ResourceSchema>,
}

/// Schema of one resource type
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSchema {
    #[serde(default)]
    pub version: u64,
    pub block: Block,
}

/// Attributes and nested blocks of a resource or nested block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub block_types: BTreeMap<String, NestedBlock>,
}

/// Attribute as it appears in the document
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type", default)]
    pub type_json: Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
}

/// Nested block as it appears in the document
#[derive(Debug, Clone, Deserialize)]
pub struct NestedBlock {
    pub nesting_mode: NestingMode,
    pub block: Block,
    #[serde(default)]
    pub min_items: u64,
    #[serde(default)]
    pub max_items: u64,
}

impl ProviderSchemaDocument {
    /// Parse a schema document, rejecting documents without any resource
    /// and resource names defined by more than one provider.
    pub fn parse(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        if doc.provider_schemas.values().all(|p| p.resource_schemas.is_empty()) {
            return Err(Error::EmptySchema);
        }

        let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
        for (provider, schema) in &doc.provider_schemas {
            for name in schema.resource_schemas.keys() {
                if let Some(first) = owners.insert(name, provider) {
                    return Err(Error::DuplicateResource {
                        name: name.clone(),
                        first: first.to_string(),
                        second: provider.clone(),
                    });
                }
            }
        }

        Ok(doc)
    }

    /// Resource schemas of every provider in the document, by resource name.
    /// Names are unique across providers once [`Self::parse`] accepted the document.
    pub fn resource_schemas(&self) -> BTreeMap<&str, &ResourceSchema> {
        self.provider_schemas
            .values()
            .flat_map(|p| p.resource_schemas.iter())
            .map(|(name, schema)| (name.as_str(), schema))
            .collect()
    }
}

impl Block {
    /// Decode this block into resource fields. `resource` only labels errors.
    pub fn to_fields(&self, resource: &str) -> Result<BTreeMap<String, Field>> {
        let mut fields = BTreeMap::new();

        for (name, attr) in &self.attributes {
            let field_type =
                FieldType::from_type_json(&attr.type_json).ok_or_else(|| Error::UnsupportedType {
                    resource: resource.to_string(),
                    field: name.clone(),
                    type_json: attr.type_json.to_string(),
                })?;
            fields.insert(
                name.clone(),
                Field {
                    field_type,
                    required: attr.required,
                    optional: attr.optional,
                    computed: attr.computed,
                    sensitive: attr.sensitive,
                    description: attr.description.clone().unwrap_or_default(),
                },
            );
        }

        for (name, nested) in &self.block_types {
            let required = nested.min_items > 0;
            fields.insert(
                name.clone(),
                Field {
                    field_type: FieldType::Block {
                        nesting: nested.nesting_mode,
                        min_items: nested.min_items,
                        max_items: nested.max_items,
                        fields: nested.block.to_fields(resource)?,
                    },
                    required,
                    optional: !required,
                    computed: false,
                    sensitive: false,
                    description: String::new(),
                },
            );
        }

        Ok(fields)
    }
}
