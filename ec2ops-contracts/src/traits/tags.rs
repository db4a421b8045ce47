// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use ec2ops_types::TagSet;

use crate::ModuleError;

/// Capability the tag reconciler is handed: the three tagging calls against
/// the external service, nothing more.
///
/// Implementations own region/credential configuration; the reconciler only
/// sequences fetch → mutate → fetch and never retries.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Current tags attached to the named load balancer.
    async fn fetch_tags(&self, name: &str) -> Result<TagSet, ModuleError>;

    /// Attach the given pairs; existing keys are overwritten by the service.
    async fn add_tags(&self, name: &str, tags: &TagSet) -> Result<(), ModuleError>;

    /// Detach the tags with the given keys.
    async fn remove_tags(&self, name: &str, keys: &[String]) -> Result<(), ModuleError>;
}
