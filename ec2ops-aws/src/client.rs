// SPDX-License-Identifier: GPL-3.0-only

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_elasticloadbalancing::Client;
use aws_sdk_elasticloadbalancing::types::{Tag, TagKeyOnly};

use ec2ops_types::TagSet;

use crate::error::{ElbClientError, Result};

/// Classic ELB client scoped to the tag API.
///
/// Constructed once per invocation via [`ElbTagClient::connect`], which
/// resolves region and credentials up front so configuration problems
/// surface before any tag call is attempted.
pub struct ElbTagClient {
    inner: Client,
}

impl ElbTagClient {
    /// Resolve configuration and build the client.
    ///
    /// `region` and `profile` are caller overrides; unset, the SDK provider
    /// chain (environment, shared config/credentials files) applies. Fails
    /// with [`ElbClientError::MissingRegion`] when no source yields a
    /// region, and with [`ElbClientError::Credentials`] when the resolved
    /// provider cannot produce credentials.
    pub async fn connect(region: Option<&str>, profile: Option<&str>) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }

        let config = loader.load().await;

        let Some(region) = config.region() else {
            return Err(ElbClientError::MissingRegion);
        };
        tracing::debug!("Resolved AWS region {region}");

        let provider = config
            .credentials_provider()
            .ok_or_else(|| ElbClientError::Credentials {
                reason: "no credentials provider configured".to_string(),
            })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| ElbClientError::Credentials {
                reason: e.to_string(),
            })?;

        Ok(Self {
            inner: Client::new(&config),
        })
    }

    /// Tags currently attached to the named load balancer.
    pub async fn fetch_tags(&self, name: &str) -> Result<TagSet> {
        let output = self
            .inner
            .describe_tags()
            .load_balancer_names(name)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_access_point_not_found_exception() {
                    ElbClientError::LoadBalancerNotFound {
                        name: name.to_string(),
                    }
                } else {
                    ElbClientError::Api {
                        message: service_error.to_string(),
                    }
                }
            })?;

        let description = output.tag_descriptions().first().ok_or_else(|| {
            ElbClientError::LoadBalancerNotFound {
                name: name.to_string(),
            }
        })?;

        let tags: TagSet = description
            .tags()
            .iter()
            .map(|tag| {
                (
                    tag.key().to_string(),
                    tag.value().unwrap_or_default().to_string(),
                )
            })
            .collect();

        tracing::debug!("Fetched {} tag(s) for ELB {name}", tags.len());
        Ok(tags)
    }

    /// Attach the given pairs to the named load balancer.
    pub async fn add_tags(&self, name: &str, tags: &TagSet) -> Result<()> {
        let mut request = self.inner.add_tags().load_balancer_names(name);
        for (key, value) in tags.iter() {
            let tag = Tag::builder()
                .key(key)
                .value(value)
                .build()
                .map_err(|e| ElbClientError::Api {
                    message: e.to_string(),
                })?;
            request = request.tags(tag);
        }

        request.send().await.map_err(|e| ElbClientError::Api {
            message: e.into_service_error().to_string(),
        })?;

        tracing::debug!("Added {} tag(s) to ELB {name}", tags.len());
        Ok(())
    }

    /// Detach the tags with the given keys from the named load balancer.
    pub async fn remove_tags(&self, name: &str, keys: &[String]) -> Result<()> {
        let mut request = self.inner.remove_tags().load_balancer_names(name);
        for key in keys {
            request = request.tags(TagKeyOnly::builder().key(key).build());
        }

        request.send().await.map_err(|e| ElbClientError::Api {
            message: e.into_service_error().to_string(),
        })?;

        tracing::debug!("Removed {} tag key(s) from ELB {name}", keys.len());
        Ok(())
    }
}
