use serde::{Deserialize, Serialize};

use crate::codec::DeviceJsonCodec;
use crate::error::ProtocolError;
use crate::{DeviceId, Scope};

use codee::{Decoder, Encoder};

/// A device as known to the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub scope: Scope,
    pub description: String,
}

/// The single message schema exchanged in both directions.
///
/// Requests from a client and broadcasts from the server share this type.
/// Fields the server echoes back but that a variant does not use (the
/// server merges whole records before broadcasting) are ignored on decode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "UPPERCASE")]
pub enum DeviceAction {
    /// Create a device. Clients leave `id` empty; the server assigns one and
    /// broadcasts the ADD back with the id filled in.
    Add {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<DeviceId>,
        name: String,
        #[serde(rename = "type")]
        device_type: String,
        scope: Scope,
        description: String,
    },
    /// Delete a device.
    Remove { id: DeviceId },
    /// Change the scope of a device.
    Update { id: DeviceId, scope: Scope },
}

impl DeviceAction {
    /// Request to add a new, public device.
    pub fn add(
        name: impl Into<String>,
        device_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        DeviceAction::Add {
            id: None,
            name: name.into(),
            device_type: device_type.into(),
            scope: Scope::Public,
            description: description.into(),
        }
    }

    pub fn remove(id: impl Into<DeviceId>) -> Self {
        DeviceAction::Remove { id: id.into() }
    }

    pub fn update(id: impl Into<DeviceId>, scope: Scope) -> Self {
        DeviceAction::Update {
            id: id.into(),
            scope,
        }
    }

    /// Wire name of the action, as carried in the `action` field.
    pub fn kind(&self) -> &'static str {
        match self {
            DeviceAction::Add { .. } => "ADD",
            DeviceAction::Remove { .. } => "REMOVE",
            DeviceAction::Update { .. } => "UPDATE",
        }
    }

    /// The device this action targets, if it names one.
    pub fn id(&self) -> Option<&DeviceId> {
        match self {
            DeviceAction::Add { id, .. } => id.as_ref(),
            DeviceAction::Remove { id } | DeviceAction::Update { id, .. } => Some(id),
        }
    }

    /// Decode a text frame.
    pub fn from_json(frame: &str) -> Result<Self, ProtocolError> {
        <DeviceJsonCodec as Decoder<DeviceAction>>::decode(frame)
    }

    /// Encode as a text frame.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        <DeviceJsonCodec as Encoder<DeviceAction>>::encode(self)
    }
}

impl From<Device> for DeviceAction {
    /// The ADD broadcast that announces `device`.
    fn from(device: Device) -> Self {
        DeviceAction::Add {
            id: Some(device.id),
            name: device.name,
            device_type: device.device_type,
            scope: device.scope,
            description: device.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn as_value(action: &DeviceAction) -> Value {
        serde_json::from_str(&action.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_decode_server_add_broadcast() {
        let frame = r#"{"action":"ADD","id":"d1","name":"Sensor A","type":"temp","scope":"PUBLIC","description":"hallway"}"#;
        let action = DeviceAction::from_json(frame).unwrap();

        assert_eq!(
            action,
            DeviceAction::Add {
                id: Some(DeviceId::from("d1")),
                name: "Sensor A".into(),
                device_type: "temp".into(),
                scope: Scope::Public,
                description: "hallway".into(),
            }
        );
        assert_eq!(action.kind(), "ADD");
        assert_eq!(action.id(), Some(&DeviceId::from("d1")));
    }

    #[test]
    fn test_client_add_omits_id() {
        let value = as_value(&DeviceAction::add("Cam1", "camera", "front door"));

        assert_eq!(
            value,
            json!({
                "action": "ADD",
                "scope": "PUBLIC",
                "name": "Cam1",
                "type": "camera",
                "description": "front door"
            })
        );
    }

    #[test]
    fn test_remove_and_update_frames() {
        assert_eq!(
            as_value(&DeviceAction::remove(4)),
            json!({ "action": "REMOVE", "id": 4 })
        );
        assert_eq!(
            as_value(&DeviceAction::update("d1", Scope::Private)),
            json!({ "action": "UPDATE", "id": "d1", "scope": "PRIVATE" })
        );
    }

    #[test]
    fn test_update_ignores_echoed_record_fields() {
        // Servers echo the whole merged record on UPDATE.
        let frame = r#"{"action":"UPDATE","id":5,"name":"Sensor A","type":"temp","scope":"PRIVATE","description":"hallway"}"#;
        let action = DeviceAction::from_json(frame).unwrap();

        assert_eq!(action, DeviceAction::update(5, Scope::Private));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = DeviceAction::from_json(r#"{"action":"RENAME","id":"d1"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(DeviceAction::from_json(r#"{"action":"UPDATE","id":"d1"}"#).is_err());
        assert!(DeviceAction::from_json(r#"{"action":"REMOVE"}"#).is_err());
        assert!(DeviceAction::from_json(r#"{"id":"d1"}"#).is_err());
    }

    #[test]
    fn test_device_becomes_add_broadcast() {
        let device = Device {
            id: DeviceId::from(9),
            name: "Lamp".into(),
            device_type: "light".into(),
            scope: Scope::Private,
            description: "desk".into(),
        };

        let action = DeviceAction::from(device);
        assert_eq!(
            as_value(&action),
            json!({
                "action": "ADD",
                "id": 9,
                "name": "Lamp",
                "type": "light",
                "scope": "PRIVATE",
                "description": "desk"
            })
        );
    }
}
