use codee::{Decoder, Encoder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ProtocolError;

/// Text codec for devicesync WebSocket communication.
///
/// Each frame carries exactly one JSON object, UTF-8 encoded, with no
/// framing or length prefix. The codec plugs straight into `leptos-use`:
///
/// ```rust,ignore
/// use devicesync_common::codec::DeviceJsonCodec;
/// use devicesync_common::DeviceAction;
///
/// let ws = use_websocket_with_options::<DeviceAction, DeviceAction, DeviceJsonCodec, (), DummyEncoder>(
///     "ws://localhost:8080/402_NRAS_WS/actions",
///     options,
/// );
/// ```
pub struct DeviceJsonCodec;

impl<T: Serialize> Encoder<T> for DeviceJsonCodec {
    type Error = ProtocolError;
    type Encoded = String;

    fn encode(val: &T) -> Result<Self::Encoded, Self::Error> {
        serde_json::to_string(val).map_err(|e| ProtocolError::Encode(e.to_string()))
    }
}

impl<T: DeserializeOwned> Decoder<T> for DeviceJsonCodec {
    type Error = ProtocolError;
    type Encoded = str;

    fn decode(val: &Self::Encoded) -> Result<T, Self::Error> {
        serde_json::from_str(val).map_err(|e| ProtocolError::Decode(e.to_string()))
    }
}
