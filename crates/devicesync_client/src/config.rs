use serde::{Deserialize, Serialize};

/// Endpoint the original page script connected to.
pub const DEFAULT_URL: &str = "ws://localhost:8080/402_NRAS_WS/actions";

/// What the provider does when the socket drops.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReconnectPolicy {
    /// Stay disconnected; the list stops updating.
    #[default]
    Disabled,
    /// Retry up to `attempts` times, `interval_ms` apart.
    Limited { attempts: u64, interval_ms: u64 },
    /// Retry forever, `interval_ms` apart.
    Unlimited { interval_ms: u64 },
}

impl ReconnectPolicy {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ReconnectPolicy::Disabled)
    }
}

/// Connection settings for [`DeviceProvider`](crate::DeviceProvider).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// WebSocket URL to connect to
    pub url: String,
    /// Open the socket as soon as the provider mounts
    pub auto_connect: bool,
    pub reconnect: ReconnectPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            auto_connect: true,
            reconnect: ReconnectPolicy::Disabled,
        }
    }
}

impl ClientConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_auto_connect(mut self, auto_connect: bool) -> Self {
        self.auto_connect = auto_connect;
        self
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }
}
