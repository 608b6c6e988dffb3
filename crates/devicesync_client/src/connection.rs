use std::fmt;

use leptos_use::core::ConnectionReadyState;

/// State of the single WebSocket connection as seen by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closing,
    /// Closed cleanly, or never opened.
    #[default]
    Closed,
    /// The socket reported an error. Live updates have stopped until a
    /// reconnect succeeds.
    Error,
}

impl ConnectionState {
    pub fn is_open(self) -> bool {
        self == ConnectionState::Open
    }

    /// Whether inbound updates have stopped arriving.
    pub fn is_stale(self) -> bool {
        matches!(self, ConnectionState::Closed | ConnectionState::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Open => "Connected",
            ConnectionState::Closing => "Closing...",
            ConnectionState::Closed => "Disconnected",
            ConnectionState::Error => "Connection error",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ConnectionReadyState> for ConnectionState {
    fn from(state: ConnectionReadyState) -> Self {
        match state {
            ConnectionReadyState::Connecting => ConnectionState::Connecting,
            ConnectionReadyState::Open => ConnectionState::Open,
            ConnectionReadyState::Closing => ConnectionState::Closing,
            ConnectionReadyState::Closed => ConnectionState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_state_mapping() {
        assert_eq!(
            ConnectionState::from(ConnectionReadyState::Open),
            ConnectionState::Open
        );
        assert_eq!(
            ConnectionState::from(ConnectionReadyState::Connecting),
            ConnectionState::Connecting
        );
        assert_eq!(
            ConnectionState::from(ConnectionReadyState::Closed),
            ConnectionState::Closed
        );
    }

    #[test]
    fn test_only_open_accepts_sends() {
        assert!(ConnectionState::Open.is_open());
        for state in [
            ConnectionState::Connecting,
            ConnectionState::Closing,
            ConnectionState::Closed,
            ConnectionState::Error,
        ] {
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_stale_states() {
        assert!(ConnectionState::Closed.is_stale());
        assert!(ConnectionState::Error.is_stale());
        assert!(!ConnectionState::Connecting.is_stale());
        assert!(!ConnectionState::Open.is_stale());
    }
}
