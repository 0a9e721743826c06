//! Service Catalog resources

use crate::provider::{Provider, Reference};

/// Register Service Catalog configurators
pub fn configure(p: &mut Provider) {
    p.add_resource_configurator("aws_servicecatalog_provisioned_product", |r| {
        // Both targets live in this same group, so the bare kind is used.
        r.references.insert("product_id".to_string(), Reference::to("Product"));
        r.references.insert(
            "provisioning_artifact_id".to_string(),
            Reference::to("ProvisioningArtifact"),
        );
    });
}
