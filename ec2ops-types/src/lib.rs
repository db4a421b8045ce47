// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for the ec2ops automation modules
//!
//! This crate defines the single source of truth for the domain types the
//! modules operate on:
//!
//! - **ec2ops-aws**: Returns these types directly from its public API
//! - **ec2ops-service**: Serializes/deserializes these types at the
//!   invocation boundary
//!
//! The types are pure data plus the tag-diff arithmetic; no I/O, no async.

pub mod tags;
pub mod volume;

pub use tags::{TagPair, TagSet};
pub use volume::{VolumeAttachment, VolumeRecord};
