// SPDX-License-Identifier: GPL-3.0-only

//! Module handlers, domain policy and adapters behind the `ec2ops` binary
//!
//! The binary parses one request, runs one handler, writes one response.
//! Handlers talk to the external tagging service only through the
//! `TagStore` capability from `ec2ops-contracts`, so the integration tests
//! drive them against a mock store.

pub mod adapters;
pub mod domain;
pub mod modules;
