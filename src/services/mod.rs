//! Service-specific resource configuration

pub mod servicecatalog;

use crate::provider::Provider;

/// Registers resource configurators on a provider
pub type ServiceConfigure = fn(&mut Provider);

/// Every service configuration, in registration order
pub const ALL: &[ServiceConfigure] = &[servicecatalog::configure];
