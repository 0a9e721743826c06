//! AWS provider bootstrap
//!
//! Wires the provider-wide override chain and the service configurators into
//! a [`Provider`] built from the embedded AWS schema.

use crate::config::Settings;
use crate::error::Result;
use crate::overrides;
use crate::provider::{Provider, ProviderBuilder};
use crate::schema;
use crate::services;

pub const RESOURCE_PREFIX: &str = "aws4";
pub const MODULE_PATH: &str = "github.com/crossplane-contrib/provider-jet-aws4";
pub const SHORT_NAME: &str = "awsjet";
pub const ROOT_GROUP: &str = "aws.jet.crossplane.io";

/// Resource patterns included in the small set release
pub const INCLUDED_RESOURCES: &[&str] = &[
    // Service Catalog
    "aws_servicecatalog_provisioned_product$",
];

/// Resource patterns never generated
pub const SKIP_LIST: &[&str] = &[];

/// Built-in patterns followed by the ones from `extra`
fn merged(builtin: &[&str], extra: &[String]) -> Vec<String> {
    builtin
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().cloned())
        .collect()
}

/// Provider configuration over the embedded schema
pub fn get_provider(settings: &Settings) -> Result<Provider> {
    get_provider_with_schema(schema::embedded(), settings)
}

/// Provider configuration over an arbitrary schema document
pub fn get_provider_with_schema(schema_json: &str, settings: &Settings) -> Result<Provider> {
    let chain = overrides::default_chain()?;

    let mut pc = ProviderBuilder::new(schema_json, RESOURCE_PREFIX, MODULE_PATH)
        .with_short_name(SHORT_NAME)
        .with_root_group(ROOT_GROUP)
        .with_include_list(merged(INCLUDED_RESOURCES, &settings.include))
        .with_skip_list(merged(SKIP_LIST, &settings.skip))
        .with_default_resource_fn(overrides::resource_fn(chain))
        .build()?;

    for configure in services::ALL {
        configure(&mut pc);
    }

    pc.configure_resources();
    Ok(pc)
}
