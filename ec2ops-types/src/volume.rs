// SPDX-License-Identifier: GPL-3.0-only

//! Volume records as consumed by the device-name lookup
//!
//! Records arrive as caller-supplied JSON and are opaque except for the two
//! consulted fields: `id` and `attachment.device`. Everything else is
//! accepted and ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeAttachment {
    /// OS-level device path the volume is attached as (e.g. "/dev/sdf").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<VolumeAttachment>,
}

impl VolumeRecord {
    pub fn new(id: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attachment: Some(VolumeAttachment {
                device: Some(device.into()),
            }),
        }
    }

    pub fn detached(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attachment: None,
        }
    }

    /// The attachment device path, if the record carries one.
    pub fn attachment_device(&self) -> Option<&str> {
        self.attachment.as_ref()?.device.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_with_extra_fields() {
        let json = r#"{
            "id": "vol-1",
            "size": 40,
            "zone": "us-east-1a",
            "attachment": { "device": "/dev/sdf", "instance_id": "i-123" }
        }"#;

        let record: VolumeRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.id, "vol-1");
        assert_eq!(record.attachment_device(), Some("/dev/sdf"));
    }

    #[test]
    fn attachment_is_optional() {
        let record: VolumeRecord =
            serde_json::from_str(r#"{"id":"vol-2"}"#).expect("deserialize record");
        assert_eq!(record.attachment_device(), None);
    }

    #[test]
    fn id_is_required() {
        let result = serde_json::from_str::<VolumeRecord>(r#"{"attachment":{}}"#);
        assert!(result.is_err());
    }
}
