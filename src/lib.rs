//! Crossplane API configuration for the Terraform AWS provider
//!
//! This crate decides how each Terraform AWS resource is exposed as a
//! Kubernetes-style API kind: which group and kind it gets, which fields are
//! added or neutralized, how its external name is derived, and which fields
//! become references to other managed resources.
//!
//! # Architecture
//!
//! - [`schema`] - Terraform provider schema document, embedded at compile time
//! - [`provider`] - Resource descriptors and the provider they belong to
//! - [`overrides`] - Provider-wide override chain applied to every resource
//! - [`services`] - Resource-specific configurators
//! - [`aws`] - Bootstrap wiring everything into a configured provider
//!
//! # Example
//!
//! ```ignore
//! use awsjet_config::{aws, config::Settings};
//!
//! let provider = aws::get_provider(&Settings::default())?;
//! for resource in provider.resources() {
//!     println!("{} -> {}/{}", resource.name, resource.short_group, resource.kind);
//! }
//! ```

pub mod aws;
pub mod comments;
pub mod config;
pub mod error;
pub mod naming;
pub mod overrides;
pub mod provider;
pub mod schema;
pub mod services;

pub use error::{Error, Result};
pub use provider::{Provider, ProviderBuilder, Reference, Resource};
