//! Provider generation configuration
//!
//! A [`Provider`] holds one [`Resource`] descriptor per Terraform resource
//! selected for generation. It is built from a provider schema document:
//!
//! - resources matching the skip list, or no entry of the include list, are dropped
//! - every remaining resource goes through the default resource function
//! - per-resource configurators run afterwards via [`Provider::configure_resources`]
//!
//! # Example
//!
//! ```ignore
//! let provider = ProviderBuilder::new(schema::embedded(), "aws4", MODULE_PATH)
//!     .with_short_name("awsjet")
//!     .with_include_list(["aws_vpc$"])
//!     .build()?;
//! ```

mod filter;
mod resource;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::schema::{Field, ProviderSchemaDocument};

pub use filter::NameFilter;
pub use resource::{
    default_group_kind, ExternalName, ExternalNameStrategy, Extractor, Reference, Resource,
    DEFAULT_VERSION,
};

/// Builds the descriptor of one selected resource from its decoded schema
pub type DefaultResourceFn = Box<dyn Fn(&str, BTreeMap<String, Field>) -> Resource>;

/// Resource-specific adjustment applied after the default resource function
pub type ResourceConfigurator = fn(&mut Resource);

/// Builder for [`Provider`]
pub struct ProviderBuilder<'a> {
    schema: &'a str,
    resource_prefix: String,
    module_path: String,
    short_name: Option<String>,
    root_group: Option<String>,
    include_list: Vec<String>,
    skip_list: Vec<String>,
    default_resource_fn: Option<DefaultResourceFn>,
}

impl<'a> ProviderBuilder<'a> {
    pub fn new(schema: &'a str, resource_prefix: &str, module_path: &str) -> Self {
        Self {
            schema,
            resource_prefix: resource_prefix.to_string(),
            module_path: module_path.to_string(),
            short_name: None,
            root_group: None,
            include_list: vec![".*".to_string()],
            skip_list: Vec::new(),
            default_resource_fn: None,
        }
    }

    pub fn with_short_name(mut self, short_name: &str) -> Self {
        self.short_name = Some(short_name.to_string());
        self
    }

    pub fn with_root_group(mut self, root_group: &str) -> Self {
        self.root_group = Some(root_group.to_string());
        self
    }

    /// Replace the include list (defaults to every resource)
    pub fn with_include_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_list = list.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skip_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_list = list.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_resource_fn(mut self, f: DefaultResourceFn) -> Self {
        self.default_resource_fn = Some(f);
        self
    }

    /// Parse the schema and build a descriptor for every selected resource
    pub fn build(self) -> Result<Provider> {
        let doc = ProviderSchemaDocument::parse(self.schema)?;
        let include = NameFilter::compile(&self.include_list)?;
        let skip = NameFilter::compile(&self.skip_list)?;

        let mut resources = BTreeMap::new();
        let mut skipped = 0usize;
        for (name, resource_schema) in doc.resource_schemas() {
            if skip.matches(name) || !include.matches(name) {
                skipped += 1;
                continue;
            }
            let fields = resource_schema.block.to_fields(name)?;
            let resource = match &self.default_resource_fn {
                Some(f) => f(name, fields),
                None => Resource::new_default(name, fields),
            };
            tracing::debug!(
                "Configured {} as {}/{}",
                name,
                resource.short_group,
                resource.kind
            );
            resources.insert(name.to_string(), resource);
        }

        tracing::info!(
            "Provider schema: {} resources selected, {} skipped",
            resources.len(),
            skipped
        );

        let short_name = self
            .short_name
            .unwrap_or_else(|| self.resource_prefix.clone());
        let root_group = self
            .root_group
            .unwrap_or_else(|| format!("{}.jet.crossplane.io", self.resource_prefix));

        Ok(Provider {
            short_name,
            root_group,
            resource_prefix: self.resource_prefix,
            module_path: self.module_path,
            include_list: self.include_list,
            skip_list: self.skip_list,
            resources,
            configurators: BTreeMap::new(),
        })
    }
}

/// Configured provider, ready for code generation
#[derive(Debug)]
pub struct Provider {
    pub short_name: String,
    /// Suffix of every API group, e.g. `aws.jet.crossplane.io`
    pub root_group: String,
    pub resource_prefix: String,
    pub module_path: String,
    pub include_list: Vec<String>,
    pub skip_list: Vec<String>,
    resources: BTreeMap<String, Resource>,
    configurators: BTreeMap<String, Vec<ResourceConfigurator>>,
}

impl Provider {
    /// Register a configurator for the named resource
    pub fn add_resource_configurator(&mut self, name: &str, f: ResourceConfigurator) {
        self.configurators.entry(name.to_string()).or_default().push(f);
    }

    /// Run registered configurators in registration order
    pub fn configure_resources(&mut self) {
        for (name, configurators) in &self.configurators {
            let Some(resource) = self.resources.get_mut(name) else {
                tracing::warn!("Configurator registered for unselected resource {}", name);
                continue;
            };
            for configure in configurators {
                configure(resource);
            }
        }
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    /// Selected resources in name order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Full API group of a resource, e.g. `ec2.aws.jet.crossplane.io`
    pub fn api_group(&self, resource: &Resource) -> String {
        format!("{}.{}", resource.short_group, self.root_group)
    }
}
