use devicesync_common::{DeviceId, ProtocolError};
use thiserror::Error;

/// Errors that can occur when using the devicesync_client library.
///
/// None of them is fatal: at worst the rendered list goes stale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceSyncError {
    /// The WebSocket is not open, so an outbound action was not sent.
    #[error("not connected to server")]
    NotConnected,

    /// An inbound frame was not a valid device action.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The server broadcast an ADD without assigning an id.
    #[error("ADD broadcast carried no device id")]
    MissingId,

    /// An UPDATE named a device this client has never seen.
    ///
    /// This means the local list has drifted from the server's.
    #[error("UPDATE for unknown device '{id}'; local list is out of sync with the server")]
    UnknownDevice {
        /// Id named by the UPDATE
        id: DeviceId,
    },

    /// The WebSocket reported an error.
    #[error("WebSocket error: {message}")]
    WebSocket {
        /// Error message from the WebSocket layer
        message: String,
    },
}
