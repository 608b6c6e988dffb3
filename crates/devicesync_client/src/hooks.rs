use leptos::prelude::*;

use crate::context::{DeviceConnection, DeviceContext};
use crate::error::DeviceSyncError;
use crate::form::AddDeviceForm;
use crate::projection::DeviceView;

/// Hook to access the [`DeviceContext`] directly, for sending actions.
///
/// # Panics
///
/// Panics if called outside of a `DeviceProvider` context.
pub fn use_device_context() -> DeviceContext {
    expect_context::<DeviceContext>()
}

/// Hook to read the projected device list, in display order.
///
/// # Panics
///
/// Panics if called outside of a `DeviceProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use devicesync_client::use_devices;
///
/// #[component]
/// fn DeviceCount() -> impl IntoView {
///     let devices = use_devices();
///     view! { <p>{move || devices.with(|d| d.len())} " devices"</p> }
/// }
/// ```
pub fn use_devices() -> Signal<Vec<DeviceView>> {
    use_device_context().devices()
}

/// Hook to access the WebSocket connection state and open/close controls.
///
/// # Panics
///
/// Panics if called outside of a `DeviceProvider` context.
pub fn use_connection() -> DeviceConnection {
    use_device_context().connection()
}

/// Hook to read the add-device form state.
pub fn use_add_device_form() -> Signal<AddDeviceForm> {
    use_device_context().form()
}

pub fn use_last_error() -> Signal<Option<DeviceSyncError>> {
    use_device_context().last_error()
}
