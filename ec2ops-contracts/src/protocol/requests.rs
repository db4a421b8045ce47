// SPDX-License-Identifier: GPL-3.0-only

//! Typed request/response shapes for the two module invocations
//!
//! These replace the host runtime's dynamic parameter binding: requests are
//! deserialized into these structs and validated at the boundary before any
//! handler logic runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ec2ops_types::{TagPair, TagSet};

/// Reconciliation mode for the tag module. Defaults to `present`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    #[default]
    Present,
    Absent,
    List,
}

impl std::fmt::Display for DesiredState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Request for `ec2ops elb-tag`.
///
/// `region` and `profile` are optional overrides; unset, the AWS provider
/// chain (environment, shared config) supplies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElbTagRequest {
    /// Name of the load balancer to act on.
    pub name: String,
    #[serde(default)]
    pub state: DesiredState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Successful outcome of `ec2ops elb-tag`.
///
/// `tags` is always the set as last fetched from the service, never the
/// locally computed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElbTagResponse {
    pub changed: bool,
    pub load_balancer_name: String,
    pub tags: Vec<TagPair>,
    pub msg: String,
}

/// Request for `ec2ops find-volume-id`: exactly two terms (a sequence of
/// volume records, then a device name), each optionally a whole-string
/// `{{ name }}` reference resolved against `variables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub terms: Vec<Value>,
    #[serde(default)]
    pub variables: serde_json::Map<String, Value>,
}
