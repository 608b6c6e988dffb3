use thiserror::Error;

/// Errors raised while turning [`DeviceAction`](crate::DeviceAction)s into
/// text frames and back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The frame was not valid JSON, carried an unknown `action`, or was
    /// missing a field its action requires.
    #[error("failed to decode device action: {0}")]
    Decode(String),

    /// The action could not be serialized.
    #[error("failed to encode device action: {0}")]
    Encode(String),
}
