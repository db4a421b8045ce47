// SPDX-License-Identifier: GPL-3.0-only

//! `TagStore` implementation over the AWS ELB client
//!
//! Maps the vendor wrapper's errors onto the closed module error kinds:
//! missing region or credentials are configuration failures surfaced before
//! any tag call, an unknown balancer is NotFound, and every other SDK
//! failure passes through as an external-service error with its message
//! intact.

use async_trait::async_trait;

use ec2ops_aws::{ElbClientError, ElbTagClient};
use ec2ops_contracts::{ModuleError, TagStore};
use ec2ops_types::TagSet;

pub struct AwsTagStore {
    client: ElbTagClient,
}

impl AwsTagStore {
    pub async fn connect(
        region: Option<&str>,
        profile: Option<&str>,
    ) -> Result<Self, ModuleError> {
        let client = ElbTagClient::connect(region, profile)
            .await
            .map_err(map_client_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TagStore for AwsTagStore {
    async fn fetch_tags(&self, name: &str) -> Result<TagSet, ModuleError> {
        self.client.fetch_tags(name).await.map_err(map_client_error)
    }

    async fn add_tags(&self, name: &str, tags: &TagSet) -> Result<(), ModuleError> {
        self.client
            .add_tags(name, tags)
            .await
            .map_err(map_client_error)
    }

    async fn remove_tags(&self, name: &str, keys: &[String]) -> Result<(), ModuleError> {
        self.client
            .remove_tags(name, keys)
            .await
            .map_err(map_client_error)
    }
}

fn map_client_error(error: ElbClientError) -> ModuleError {
    match error {
        ElbClientError::MissingRegion | ElbClientError::Credentials { .. } => {
            ModuleError::configuration(error.to_string())
        }
        ElbClientError::LoadBalancerNotFound { .. } => ModuleError::not_found(error.to_string()),
        ElbClientError::Api { message } => ModuleError::external_service(message),
    }
}
