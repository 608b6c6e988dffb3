use std::sync::Arc;

use devicesync_common::codec::DeviceJsonCodec;
use devicesync_common::DeviceAction;
use leptos::prelude::*;
use leptos_use::{
    use_websocket_with_options, DummyEncoder, ReconnectLimit, UseWebSocketError,
    UseWebSocketOptions, UseWebSocketReturn,
};

use crate::client::DeviceListClient;
use crate::config::{ClientConfig, ReconnectPolicy};
use crate::context::DeviceContext;

/// Provider component that opens the device WebSocket and provides
/// [`DeviceContext`].
///
/// Exactly one socket is opened per provider and it lives as long as the
/// provider does. Inbound frames are applied in the order they arrive.
///
/// # Example
///
/// ```rust,ignore
/// use devicesync_client::{ClientConfig, DeviceListPage, DeviceProvider};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <DeviceProvider config=ClientConfig::default().with_url("ws://localhost:8080/actions")>
///             <DeviceListPage />
///         </DeviceProvider>
///     }
/// }
/// ```
#[component]
pub fn DeviceProvider(
    /// Connection settings (default: [`ClientConfig::default`])
    #[prop(optional)]
    config: Option<ClientConfig>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    // The context must exist before the socket so the socket callbacks can
    // reach it; the real send/open/close are filled in below.
    let send_fn: StoredValue<Option<Arc<dyn Fn(&DeviceAction) + Send + Sync>>> =
        StoredValue::new(None);
    let open_fn: StoredValue<Option<Arc<dyn Fn() + Send + Sync>>> = StoredValue::new(None);
    let close_fn: StoredValue<Option<Arc<dyn Fn() + Send + Sync>>> = StoredValue::new(None);

    let send_arc: Arc<dyn Fn(&DeviceAction) + Send + Sync> =
        Arc::new(move |action: &DeviceAction| {
            if let Some(send) = send_fn.get_value() {
                send(action);
            }
        });
    let open_arc: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        if let Some(open) = open_fn.get_value() {
            open();
        }
    });
    let close_arc: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        if let Some(close) = close_fn.get_value() {
            close();
        }
    });

    let ctx = DeviceContext::new(DeviceListClient::with_sender(send_arc), open_arc, close_arc);
    provide_context(ctx);

    log::info!("connecting device list to {}", config.url);

    let UseWebSocketReturn {
        ready_state,
        send: raw_send,
        open,
        close,
        ..
    } = use_websocket_with_options::<DeviceAction, DeviceAction, DeviceJsonCodec, (), DummyEncoder>(
        &config.url,
        UseWebSocketOptions::default()
            .immediate(config.auto_connect)
            .reconnect_limit(reconnect_limit(config.reconnect))
            .reconnect_interval(reconnect_interval(config.reconnect))
            .on_error(move |err| match err {
                UseWebSocketError::Event(_) => ctx.socket_failed("socket reported an error"),
                // Decoding is done by the raw handler, which already logged it.
                _ => log::debug!("codec rejected an inbound frame"),
            })
            .on_message_raw(move |frame: &str| {
                ctx.handle_frame(frame);
            }),
    );

    send_fn.set_value(Some(Arc::new(move |action: &DeviceAction| {
        raw_send(action);
    })));
    open_fn.set_value(Some(Arc::new(move || {
        open();
    })));
    close_fn.set_value(Some(Arc::new(move || {
        close();
    })));

    Effect::new(move || {
        let state = ready_state.get();
        ctx.observe_ready_state(state.into());
    });

    children()
}

fn reconnect_limit(policy: ReconnectPolicy) -> ReconnectLimit {
    match policy {
        ReconnectPolicy::Disabled => ReconnectLimit::Limited(0),
        ReconnectPolicy::Limited { attempts, .. } => ReconnectLimit::Limited(attempts),
        ReconnectPolicy::Unlimited { .. } => ReconnectLimit::Infinite,
    }
}

fn reconnect_interval(policy: ReconnectPolicy) -> u64 {
    match policy {
        ReconnectPolicy::Disabled => 0,
        ReconnectPolicy::Limited { interval_ms, .. }
        | ReconnectPolicy::Unlimited { interval_ms } => interval_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_policy_never_retries() {
        assert!(matches!(
            reconnect_limit(ReconnectPolicy::Disabled),
            ReconnectLimit::Limited(0)
        ));
    }

    #[test]
    fn test_policy_maps_to_socket_options() {
        let limited = ReconnectPolicy::Limited {
            attempts: 4,
            interval_ms: 1500,
        };
        assert!(matches!(reconnect_limit(limited), ReconnectLimit::Limited(4)));
        assert_eq!(reconnect_interval(limited), 1500);

        let unlimited = ReconnectPolicy::Unlimited { interval_ms: 250 };
        assert!(matches!(reconnect_limit(unlimited), ReconnectLimit::Infinite));
        assert_eq!(reconnect_interval(unlimited), 250);
    }
}
