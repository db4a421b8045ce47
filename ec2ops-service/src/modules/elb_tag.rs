// SPDX-License-Identifier: GPL-3.0-only

//! Tag reconciliation handler for the `elb-tag` module
//!
//! Sequences fetch → diff → mutate → fetch against the injected `TagStore`.
//! The re-fetched set is always the reported state; the locally computed
//! diff only decides what to send and what the message says.

use std::sync::Arc;

use ec2ops_contracts::{DesiredState, ElbTagRequest, ElbTagResponse, ModuleError, TagStore};
use ec2ops_types::TagSet;

pub struct ElbTagModule {
    store: Arc<dyn TagStore>,
}

impl ElbTagModule {
    pub fn new(store: Arc<dyn TagStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: &ElbTagRequest) -> Result<ElbTagResponse, ModuleError> {
        match request.state {
            DesiredState::Present => {
                let desired = required_tags(request)?;
                self.ensure_present(&request.name, desired).await
            }
            DesiredState::Absent => {
                let desired = required_tags(request)?;
                self.ensure_absent(&request.name, desired).await
            }
            DesiredState::List => self.list(&request.name).await,
        }
    }

    async fn ensure_present(
        &self,
        name: &str,
        desired: &TagSet,
    ) -> Result<ElbTagResponse, ModuleError> {
        let current = self.store.fetch_tags(name).await?;
        let to_add = current.additions(desired);

        if to_add.is_empty() {
            tracing::info!("No tag changes needed for ELB {name}");
            return Ok(ElbTagResponse {
                changed: false,
                load_balancer_name: name.to_string(),
                tags: current.to_pairs(),
                msg: format!("Tags already exist for ELB {name}."),
            });
        }

        tracing::info!("Adding {} tag(s) to ELB {name}", to_add.len());
        self.store.add_tags(name, &to_add).await?;
        let resulting = self.store.fetch_tags(name).await?;

        Ok(ElbTagResponse {
            changed: true,
            load_balancer_name: name.to_string(),
            tags: resulting.to_pairs(),
            msg: format!("Tags {} created for ELB {name}.", format_tags(&to_add)),
        })
    }

    async fn ensure_absent(
        &self,
        name: &str,
        desired: &TagSet,
    ) -> Result<ElbTagResponse, ModuleError> {
        let current = self.store.fetch_tags(name).await?;
        // Removal is by exact pair: a desired pair whose value does not
        // match the attached value leaves that tag alone.
        let to_remove = current.exact_matches(desired);

        if to_remove.is_empty() {
            tracing::info!("No matching tags to remove from ELB {name}");
            return Ok(ElbTagResponse {
                changed: false,
                load_balancer_name: name.to_string(),
                tags: current.to_pairs(),
                msg: format!("Nothing to remove for ELB {name}."),
            });
        }

        tracing::info!("Removing {} tag(s) from ELB {name}", to_remove.len());
        self.store.remove_tags(name, &to_remove.keys()).await?;
        let resulting = self.store.fetch_tags(name).await?;

        Ok(ElbTagResponse {
            changed: true,
            load_balancer_name: name.to_string(),
            tags: resulting.to_pairs(),
            msg: format!("Tags {} removed for ELB {name}.", format_tags(&to_remove)),
        })
    }

    async fn list(&self, name: &str) -> Result<ElbTagResponse, ModuleError> {
        let current = self.store.fetch_tags(name).await?;
        tracing::info!("Listed {} tag(s) for ELB {name}", current.len());

        Ok(ElbTagResponse {
            changed: false,
            load_balancer_name: name.to_string(),
            tags: current.to_pairs(),
            msg: format!("Tags listed for ELB {name}."),
        })
    }
}

fn required_tags(request: &ElbTagRequest) -> Result<&TagSet, ModuleError> {
    match &request.tags {
        Some(tags) if !tags.is_empty() => Ok(tags),
        _ => Err(ModuleError::validation(format!(
            "tags argument is required when state is {}",
            request.state
        ))),
    }
}

fn format_tags(tags: &TagSet) -> String {
    let body = tags
        .iter()
        .map(|(key, value)| format!("\"{key}\": \"{value}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}
