use std::sync::Arc;

use devicesync_common::{DeviceId, Scope};
use leptos::prelude::*;

use crate::client::DeviceListClient;
use crate::connection::ConnectionState;
use crate::error::DeviceSyncError;
use crate::form::{AddDeviceForm, FormField};
use crate::projection::DeviceView;

/// Connection control interface exposed to components.
#[derive(Clone, Copy)]
pub struct DeviceConnection {
    /// Current connection state
    pub state: Signal<ConnectionState>,
    /// Last error reported by the client or the socket
    pub last_error: Signal<Option<DeviceSyncError>>,
    ctx: DeviceContext,
}

impl DeviceConnection {
    /// Open the WebSocket connection
    pub fn open(&self) {
        self.ctx.open();
    }

    /// Close the WebSocket connection
    pub fn close(&self) {
        self.ctx.close();
    }
}

/// Context providing access to the device list.
///
/// Provided by [`DeviceProvider`](crate::DeviceProvider) and consumed by the
/// hooks in [`crate::hooks`]. It is `Copy`, so event handlers can capture it
/// freely.
#[derive(Clone, Copy)]
pub struct DeviceContext {
    client: RwSignal<DeviceListClient>,
    open: StoredValue<Arc<dyn Fn() + Send + Sync>>,
    close: StoredValue<Arc<dyn Fn() + Send + Sync>>,
}

impl DeviceContext {
    /// Create a new DeviceContext.
    ///
    /// This is typically called by `DeviceProvider`, not by user code.
    pub fn new(
        client: DeviceListClient,
        open: Arc<dyn Fn() + Send + Sync>,
        close: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            client: RwSignal::new(client),
            open: StoredValue::new(open),
            close: StoredValue::new(close),
        }
    }

    pub fn connection(&self) -> DeviceConnection {
        let client = self.client;
        DeviceConnection {
            state: Signal::derive(move || client.with(|c| c.connection_state())),
            last_error: self.last_error(),
            ctx: *self,
        }
    }

    /// Projected devices. Only changes when the list itself changes, not
    /// when the add form is edited.
    pub fn devices(&self) -> Signal<Vec<DeviceView>> {
        let client = self.client;
        Memo::new(move |_| client.with(|c| c.views())).into()
    }

    /// Last error that occurred. Cleared when the connection (re)opens.
    pub fn last_error(&self) -> Signal<Option<DeviceSyncError>> {
        let client = self.client;
        Memo::new(move |_| client.with(|c| c.last_error().cloned())).into()
    }

    pub fn form(&self) -> Signal<AddDeviceForm> {
        let client = self.client;
        Memo::new(move |_| client.with(|c| c.form().clone())).into()
    }

    pub fn open(&self) {
        (self.open.get_value())();
    }

    pub fn close(&self) {
        (self.close.get_value())();
    }

    /// Feed one inbound text frame to the client. Failures are kept as the
    /// client's last error.
    pub fn handle_frame(&self, frame: &str) {
        self.client.update(|c| {
            _ = c.handle_frame(frame);
        });
    }

    pub fn observe_ready_state(&self, state: ConnectionState) {
        self.client.update(|c| c.observe_ready_state(state));
    }

    /// Record a socket failure and mark the connection as errored.
    pub fn socket_failed(&self, message: impl Into<String>) {
        let message = message.into();
        self.client.update(|c| c.socket_failed(message));
    }

    pub fn record_error(&self, err: DeviceSyncError) {
        self.client.update(|c| c.record_error(err));
    }

    pub fn show_form(&self) {
        self.client.update(|c| c.show_form());
    }

    pub fn hide_form(&self) {
        self.client.update(|c| c.hide_form());
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.client.update(|c| c.set_field(field, value));
    }

    pub fn submit_form(&self) {
        if let Some(Err(err)) = self.client.try_update(|c| c.submit_form()) {
            self.record_error(err);
        }
    }

    pub fn remove_device(&self, id: &DeviceId) {
        self.report(self.client.with_untracked(|c| c.remove_device(id)));
    }

    pub fn toggle_scope(&self, id: &DeviceId, scope: Scope) {
        self.report(self.client.with_untracked(|c| c.toggle_scope(id, scope)));
    }

    fn report(&self, result: Result<(), DeviceSyncError>) {
        if let Err(err) = result {
            self.record_error(err);
        }
    }
}
