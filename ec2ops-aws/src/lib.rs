// SPDX-License-Identifier: GPL-3.0-only

//! Thin wrapper over the AWS classic ELB client, scoped to tag operations
//!
//! Owns region/credential resolution and the three tagging calls. Returns
//! domain types from `ec2ops-types`; never depends on the invocation
//! protocol, so the service layer decides how SDK failures map onto module
//! errors.

pub mod client;
pub mod error;

pub use client::ElbTagClient;
pub use error::{ElbClientError, Result};
