// SPDX-License-Identifier: GPL-3.0-only

//! Lookup handler for the `find-volume-id` module
//!
//! Resolves the two request terms against the caller's variables, shapes
//! them into typed inputs, and delegates the scan to the pure domain
//! function. The success value is a single-element sequence, matching the
//! host's lookup convention.

use ec2ops_contracts::{LookupRequest, ModuleError};
use ec2ops_types::VolumeRecord;

use crate::domain::{terms, volumes};

pub fn handle(request: &LookupRequest) -> Result<Vec<String>, ModuleError> {
    let resolved = terms::resolve(&request.terms, &request.variables)?;

    let [volumes_term, device_term] = resolved.as_slice() else {
        return Err(ModuleError::validation(format!(
            "expected exactly two terms (volumes, device_name), got {}",
            resolved.len()
        )));
    };

    let volumes: Vec<VolumeRecord> =
        serde_json::from_value(volumes_term.clone()).map_err(|e| {
            ModuleError::validation(format!(
                "first term must be a sequence of volume records: {e}"
            ))
        })?;

    let device_name = device_term
        .as_str()
        .ok_or_else(|| ModuleError::validation("second term must be a device name string"))?;

    tracing::info!(
        "Scanning {} volume record(s) for device {device_name}",
        volumes.len()
    );
    let id = volumes::find_volume_id(&volumes, device_name)?;

    Ok(vec![id.to_string()])
}
