// SPDX-License-Identifier: GPL-3.0-only

//! ec2ops - host-invocable automation modules for EC2
//!
//! One subcommand per module: `elb-tag` reconciles key/value tags on a
//! classic ELB, `find-volume-id` looks up a volume id by attachment device.
//! Requests are JSON on stdin (or a file), responses are JSON on stdout;
//! logs go to stderr so stdout stays a clean protocol channel.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing_subscriber::{EnvFilter, fmt};

use ec2ops_contracts::{ElbTagRequest, InvocationId, LookupRequest, ModuleError};
use ec2ops_service::adapters::aws::AwsTagStore;
use ec2ops_service::modules::{elb_tag::ElbTagModule, find_volume_id};

#[derive(Debug, Parser)]
#[command(name = "ec2ops")]
#[command(about = "Automation modules for EC2 ELB tagging and volume lookup")]
struct Ec2opsCli {
    #[command(subcommand)]
    command: Ec2opsCommand,
}

#[derive(Debug, Subcommand)]
enum Ec2opsCommand {
    /// Create, remove and list tag(s) on an EC2 ELB
    ElbTag {
        /// Path to the JSON request; read from stdin when omitted
        #[arg(long)]
        request: Option<PathBuf>,
    },
    /// Scan volume records for one attached as the given device name
    FindVolumeId {
        /// Path to the JSON request; read from stdin when omitted
        #[arg(long)]
        request: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logging to stderr; stdout carries the response
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ec2ops=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Ec2opsCli::parse();
    let invocation = InvocationId::new();
    tracing::debug!(%invocation, "Starting ec2ops v{}", env!("CARGO_PKG_VERSION"));

    let outcome = match cli.command {
        Ec2opsCommand::ElbTag { request } => run_elb_tag(request.as_deref()).await,
        Ec2opsCommand::FindVolumeId { request } => run_find_volume_id(request.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%invocation, "{error}");
            emit(&error);
            ExitCode::from(error.kind.exit_code() as u8)
        }
    }
}

async fn run_elb_tag(request: Option<&Path>) -> Result<(), ModuleError> {
    let request: ElbTagRequest = read_request(request)?;
    tracing::info!(
        "Reconciling tags on ELB {} (state {})",
        request.name,
        request.state
    );

    let store =
        AwsTagStore::connect(request.region.as_deref(), request.profile.as_deref()).await?;
    let module = ElbTagModule::new(Arc::new(store));
    let response = module.handle(&request).await?;

    emit(&response);
    Ok(())
}

fn run_find_volume_id(request: Option<&Path>) -> Result<(), ModuleError> {
    let request: LookupRequest = read_request(request)?;
    let matched = find_volume_id::handle(&request)?;

    emit(&matched);
    Ok(())
}

fn read_request<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, ModuleError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ModuleError::validation(format!(
                "failed to read request from {}: {e}",
                path.display()
            ))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ModuleError::validation(format!("failed to read request: {e}")))?;
            buffer
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| ModuleError::validation(format!("invalid request: {e}")))
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(error) => tracing::error!("Failed to serialize response: {error}"),
    }
}
