//! Transport-agnostic device list client.
//!
//! [`DeviceListClient`] owns everything the page knows: the device store,
//! the add-form and the connection state. It does not own a socket; the
//! caller hands it a `send` function and feeds it inbound frames. The Leptos
//! layer ([`DeviceProvider`](crate::DeviceProvider)) wires it to
//! `leptos-use`'s WebSocket, and tests wire it to a recorder.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use devicesync_client::{ConnectionState, DeviceListClient};
//! use devicesync_common::DeviceAction;
//!
//! let sent = Arc::new(Mutex::new(Vec::<DeviceAction>::new()));
//! let sink = sent.clone();
//! let mut client = DeviceListClient::new(move |action: &DeviceAction| {
//!     sink.lock().unwrap().push(action.clone());
//! });
//! client.set_connection_state(ConnectionState::Open);
//!
//! client
//!     .handle_frame(r#"{"action":"ADD","id":1,"name":"Lamp","type":"light","scope":"PUBLIC","description":"desk"}"#)
//!     .unwrap();
//! assert_eq!(client.devices().len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use devicesync_common::{DeviceAction, DeviceId, Scope};
use log::{debug, error, info, warn};

use crate::connection::ConnectionState;
use crate::error::DeviceSyncError;
use crate::form::{AddDeviceForm, FormField};
use crate::projection::{project_all, DeviceView};
use crate::store::{DeviceStore, StoreChange};

#[derive(Clone)]
pub struct DeviceListClient {
    send: Arc<dyn Fn(&DeviceAction) + Send + Sync>,
    store: DeviceStore,
    form: AddDeviceForm,
    connection: ConnectionState,
    last_error: Option<DeviceSyncError>,
}

impl DeviceListClient {
    /// Create a client that transmits outbound actions through `send`.
    ///
    /// `send` is only called while the connection state is
    /// [`ConnectionState::Open`].
    pub fn new(send: impl Fn(&DeviceAction) + Send + Sync + 'static) -> Self {
        Self::with_sender(Arc::new(send))
    }

    pub fn with_sender(send: Arc<dyn Fn(&DeviceAction) + Send + Sync>) -> Self {
        Self {
            send,
            store: DeviceStore::new(),
            form: AddDeviceForm::default(),
            connection: ConnectionState::default(),
            last_error: None,
        }
    }

    pub fn devices(&self) -> &DeviceStore {
        &self.store
    }

    /// Render projection of every device, in display order.
    pub fn views(&self) -> Vec<DeviceView> {
        project_all(&self.store)
    }

    pub fn form(&self) -> &AddDeviceForm {
        &self.form
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    /// Last error reported by an inbound frame, a request or the socket.
    /// Cleared when a connection opens.
    pub fn last_error(&self) -> Option<&DeviceSyncError> {
        self.last_error.as_ref()
    }

    pub fn record_error(&mut self, err: DeviceSyncError) {
        self.last_error = Some(err);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Move to `state`.
    ///
    /// Every newly opened session starts with the server replaying its full
    /// list as ADDs, so entering [`ConnectionState::Open`] drops the devices
    /// cached from an earlier session along with the last error.
    pub fn set_connection_state(&mut self, state: ConnectionState) {
        let previous = std::mem::replace(&mut self.connection, state);
        if previous == state {
            return;
        }
        match state {
            ConnectionState::Open => {
                info!("device connection open");
                if !self.store.is_empty() {
                    info!(
                        "discarding {} cached devices until the server resends them",
                        self.store.len()
                    );
                    self.store.clear();
                }
                self.last_error = None;
            }
            ConnectionState::Closed | ConnectionState::Error if previous.is_open() => {
                warn!("device connection lost ({state}); live updates stopped")
            }
            _ => debug!("device connection {previous} -> {state}"),
        }
    }

    /// Follow the socket's ready state. A close that follows an error keeps
    /// the error visible.
    pub fn observe_ready_state(&mut self, state: ConnectionState) {
        if self.connection == ConnectionState::Error && state == ConnectionState::Closed {
            return;
        }
        self.set_connection_state(state);
    }

    /// Decode and apply one inbound text frame.
    ///
    /// Frames that fail to decode leave the list untouched.
    /// A frame can only arrive on an open socket, so one that lands before
    /// the ready state is observed opens the session first.
    pub fn handle_frame(&mut self, frame: &str) -> Result<StoreChange, DeviceSyncError> {
        debug!("received frame ({} bytes)", frame.len());
        if !self.connection.is_open() {
            self.set_connection_state(ConnectionState::Open);
        }
        let action = match DeviceAction::from_json(frame) {
            Ok(action) => action,
            Err(err) => {
                warn!("ignoring inbound frame: {err}");
                let err = DeviceSyncError::from(err);
                self.record_error(err.clone());
                return Err(err);
            }
        };
        self.handle_action(action)
    }

    /// Apply an already decoded inbound action.
    pub fn handle_action(&mut self, action: DeviceAction) -> Result<StoreChange, DeviceSyncError> {
        let kind = action.kind();
        match self.store.apply(action) {
            Ok(StoreChange::Unchanged(id)) => {
                warn!("REMOVE for unknown device '{id}'; nothing to do");
                Ok(StoreChange::Unchanged(id))
            }
            Ok(change) => {
                debug!("applied {kind}: {change:?}");
                Ok(change)
            }
            Err(err) => {
                error!("failed to apply {kind}: {err}");
                self.record_error(err.clone());
                Err(err)
            }
        }
    }

    /// Mark the connection as failed and keep `message` as the last error.
    pub fn socket_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("device socket error: {message}");
        self.set_connection_state(ConnectionState::Error);
        self.record_error(DeviceSyncError::WebSocket { message });
    }

    /// Transmit an action over the connection.
    pub fn send(&self, action: &DeviceAction) -> Result<(), DeviceSyncError> {
        if !self.connection.is_open() {
            warn!(
                "dropping outbound {} while {}",
                action.kind(),
                self.connection
            );
            return Err(DeviceSyncError::NotConnected);
        }
        debug!("sending {}", action.kind());
        (self.send)(action);
        Ok(())
    }

    pub fn show_form(&mut self) {
        self.form.show();
    }

    pub fn hide_form(&mut self) {
        self.form.hide();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Hide and clear the add form, then send its contents as an ADD.
    pub fn submit_form(&mut self) -> Result<(), DeviceSyncError> {
        let action = self.form.submit();
        self.send(&action)
    }

    pub fn add_device(
        &self,
        name: impl Into<String>,
        device_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), DeviceSyncError> {
        self.send(&DeviceAction::add(name, device_type, description))
    }

    pub fn remove_device(&self, id: &DeviceId) -> Result<(), DeviceSyncError> {
        self.send(&DeviceAction::remove(id.clone()))
    }

    /// Ask the server to move device `id` to `scope`.
    pub fn toggle_scope(&self, id: &DeviceId, scope: Scope) -> Result<(), DeviceSyncError> {
        self.send(&DeviceAction::update(id.clone(), scope))
    }
}

impl fmt::Debug for DeviceListClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceListClient")
            .field("devices", &self.store.len())
            .field("form", &self.form)
            .field("connection", &self.connection)
            .field("last_error", &self.last_error)
            .finish()
    }
}
