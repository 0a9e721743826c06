//! Provider-wide resource overrides
//!
//! Every selected resource goes through the same ordered [`Override`] chain
//! right after its default descriptor is derived:
//!
//! 1. group/kind corrections from [`group_kind`]
//! 2. `region` field injection
//! 3. `tags_all` neutralization
//! 4. provider-assigned external name
//! 5. `name_prefix` omission
//! 6. reference wiring from [`references`]
//!
//! Each step is idempotent.

pub mod group_kind;
pub mod references;

use std::collections::BTreeMap;

use crate::comments::{Comment, CommentOption};
use crate::error::{Error, Result};
use crate::provider::{DefaultResourceFn, ExternalName, Resource};
use crate::schema::Field;

pub use group_kind::{group_map, kind_map, resolve_group_kind, GroupKind, GroupOverride};
pub use references::{add_known_references, api_type, NETWORKING_GROUP};

/// Group without a regional notion
pub const GLOBAL_GROUP: &str = "iam";

const REGION_FIELD: &str = "region";
const REGION_DESCRIPTION: &str = "Region is the region you'd like your resource to be created in.\n";

/// One step of the override chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    GroupKind,
    /// Carries the rendered region comment so applying it cannot fail
    RegionAddition { description: String },
    TagsAllRemoval,
    IdentifierFromProvider,
    NamePrefixRemoval,
    KnownReferences,
}

impl Override {
    /// Region step with its comment validated up front
    pub fn region_addition() -> Result<Self> {
        let comment = Comment::new(REGION_DESCRIPTION, &[CommentOption::TfTag("-".to_string())])
            .map_err(|source| Error::Comment {
                field: REGION_FIELD.to_string(),
                source,
            })?;
        Ok(Self::RegionAddition {
            description: comment.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GroupKind => "group-kind",
            Self::RegionAddition { .. } => "region-addition",
            Self::TagsAllRemoval => "tags-all-removal",
            Self::IdentifierFromProvider => "identifier-from-provider",
            Self::NamePrefixRemoval => "name-prefix-removal",
            Self::KnownReferences => "known-references",
        }
    }

    pub fn apply(&self, r: &mut Resource) {
        match self {
            Self::GroupKind => {
                if let Some(GroupKind { group, kind }) = resolve_group_kind(&r.name) {
                    if let Some(group) = group {
                        r.short_group = group;
                    }
                    r.kind = kind;
                }
            }
            Self::RegionAddition { description } => {
                if r.short_group == GLOBAL_GROUP {
                    return;
                }
                r.schema
                    .entry(REGION_FIELD.to_string())
                    .and_modify(|f| {
                        f.required = true;
                        f.optional = false;
                        f.description = description.clone();
                    })
                    .or_insert_with(|| Field::required_string(description.clone()));
            }
            Self::TagsAllRemoval => {
                // tags_all only accumulates provider-wide default tags in the
                // state; `tags` stays the user input.
                if let Some(t) = r.schema.get_mut("tags_all") {
                    t.computed = true;
                    t.optional = false;
                }
            }
            Self::IdentifierFromProvider => {
                // Works for every AWS type: even a user-chosen ID shows up as
                // the state ID. Resource configurators may replace it.
                r.external_name = ExternalName::identifier_from_provider();
            }
            Self::NamePrefixRemoval => {
                r.external_name.omit("name_prefix");
            }
            Self::KnownReferences => add_known_references(r),
        }
    }
}

/// The provider-wide chain, in application order
pub fn default_chain() -> Result<Vec<Override>> {
    Ok(vec![
        Override::GroupKind,
        Override::region_addition()?,
        Override::TagsAllRemoval,
        Override::IdentifierFromProvider,
        Override::NamePrefixRemoval,
        Override::KnownReferences,
    ])
}

/// Apply `chain` to `r` in order
pub fn apply_all(chain: &[Override], r: &mut Resource) {
    for step in chain {
        step.apply(r);
        tracing::debug!("Applied {} to {}", step.name(), r.name);
    }
}

/// Default resource function running `chain` after default derivation
pub fn resource_fn(chain: Vec<Override>) -> DefaultResourceFn {
    Box::new(move |name: &str, schema: BTreeMap<String, Field>| {
        let mut r = Resource::new_default(name, schema);
        apply_all(&chain, &mut r);
        r
    })
}
