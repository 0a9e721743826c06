//! Field descriptors decoded from the provider schema

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a nested block repeats inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    Single,
    Group,
    List,
    Set,
    Map,
}

/// Type of a resource field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "of")]
pub enum FieldType {
    String,
    Number,
    Bool,
    Dynamic,
    List(Box<FieldType>),
    Set(Box<FieldType>),
    Map(Box<FieldType>),
    Object(BTreeMap<String, FieldType>),
    Tuple(Vec<FieldType>),
    Block {
        nesting: NestingMode,
        min_items: u64,
        max_items: u64,
        fields: BTreeMap<String, Field>,
    },
}

impl FieldType {
    /// Decode a type expression in Terraform's JSON type notation:
    /// `"string"`, `["list", "string"]`, `["object", {"a": "number"}]`, ...
    ///
    /// Returns `None` for anything outside that notation.
    pub fn from_type_json(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => match s.as_str() {
                "string" => Some(Self::String),
                "number" => Some(Self::Number),
                "bool" => Some(Self::Bool),
                "dynamic" => Some(Self::Dynamic),
                _ => None,
            },
            Value::Array(parts) => {
                let [kind, inner] = parts.as_slice() else {
                    return None;
                };
                match kind.as_str()? {
                    "list" => Some(Self::List(Box::new(Self::from_type_json(inner)?))),
                    "set" => Some(Self::Set(Box::new(Self::from_type_json(inner)?))),
                    "map" => Some(Self::Map(Box::new(Self::from_type_json(inner)?))),
                    "object" => inner
                        .as_object()?
                        .iter()
                        .map(|(k, t)| Some((k.clone(), Self::from_type_json(t)?)))
                        .collect::<Option<BTreeMap<_, _>>>()
                        .map(Self::Object),
                    "tuple" => inner
                        .as_array()?
                        .iter()
                        .map(Self::from_type_json)
                        .collect::<Option<Vec<_>>>()
                        .map(Self::Tuple),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// One field of a resource schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Field {
    /// Required, user-settable string field
    pub fn required_string(description: impl Into<String>) -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
            description: description.into(),
        }
    }

    /// Observed-only field the user cannot set
    pub fn is_status(&self) -> bool {
        self.computed && !self.optional
    }
}
