//! # devicesync_common
//!
//! Wire-level types shared by devicesync clients and anything else that
//! speaks the device action protocol: the [`DeviceAction`] tagged union, the
//! [`Scope`] and [`DeviceId`] value types, and the JSON text codec used on the
//! WebSocket.
//!
//! Every frame on the socket is a single UTF-8 JSON object whose `action`
//! field selects the variant:
//!
//! ```text
//! {"action":"ADD","id":3,"name":"Sensor A","type":"temp","scope":"PUBLIC","description":"hallway"}
//! {"action":"UPDATE","id":3,"scope":"PRIVATE"}
//! {"action":"REMOVE","id":3}
//! ```

pub mod messages;
pub use messages::*;

pub mod codec;

pub mod error;
pub use error::ProtocolError;

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Visibility of a device.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    /// Visible to every connected client.
    #[default]
    Public,
    /// Visible only to the session that made it private.
    Private,
}

impl Scope {
    /// The scope a toggle link proposes when the device currently has `self`.
    pub fn toggled(self) -> Self {
        match self {
            Scope::Public => Scope::Private,
            Scope::Private => Scope::Public,
        }
    }

    /// Wire spelling of the scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Public => "PUBLIC",
            Scope::Private => "PRIVATE",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a device, assigned by the server.
///
/// Servers may hand out numeric or textual ids. The id keeps the JSON
/// representation it arrived in so that REMOVE and UPDATE requests echo it
/// back unchanged; a server that only accepts integers keeps working.
/// Both forms render the same through `Display`, and the client's store keys
/// devices by that rendering, so `3` and `"3"` are one device.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum DeviceId {
    Number(i64),
    Text(String),
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceId::Number(n) => write!(f, "{n}"),
            DeviceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DeviceId {
    fn from(id: i64) -> Self {
        DeviceId::Number(id)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        DeviceId::Text(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        DeviceId::Text(id)
    }
}
