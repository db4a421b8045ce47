// SPDX-License-Identifier: GPL-3.0-only

use ec2ops_contracts::ModuleError;
use ec2ops_types::VolumeRecord;

/// Id of the first record (input order) attached as `device_name`.
///
/// Records without an attachment or device never match. An exhausted scan
/// is a NotFound error carrying the searched device name.
pub fn find_volume_id<'a>(
    volumes: &'a [VolumeRecord],
    device_name: &str,
) -> Result<&'a str, ModuleError> {
    volumes
        .iter()
        .find(|volume| volume.attachment_device() == Some(device_name))
        .map(|volume| volume.id.as_str())
        .ok_or_else(|| {
            ModuleError::not_found(format!("device_name '{device_name}' not found in volumes"))
        })
}
