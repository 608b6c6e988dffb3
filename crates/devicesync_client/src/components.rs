//! Ready-to-use components for the device list page.
//!
//! Device text is always inserted as text nodes and link behavior is bound
//! with `on:click` handlers, so nothing a server sends is ever parsed as
//! markup.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::form::{FormField, FORM_ID};
use crate::hooks::{use_add_device_form, use_connection, use_device_context, use_devices};
use crate::projection::DeviceView;

/// Identifier of the element holding the device list.
pub const CONTENT_ID: &str = "content";

/// The whole page: connection banner, add-device panel and the list.
#[component]
pub fn DeviceListPage() -> impl IntoView {
    view! {
        <ConnectionBanner />
        <AddDevicePanel />
        <DeviceList />
    }
}

/// Container with one [`DeviceCard`] per known device.
#[component]
pub fn DeviceList() -> impl IntoView {
    let devices = use_devices();

    view! {
        <div id=CONTENT_ID>
            <For
                each=move || devices.get()
                key=|device| device.clone()
                let:device
            >
                <DeviceCard device=device />
            </For>
        </div>
    }
}

/// One rendered device. Regions appear in the order of
/// [`DeviceView::regions`].
#[component]
pub fn DeviceCard(device: DeviceView) -> impl IntoView {
    let ctx = use_device_context();

    let DeviceView {
        id,
        element_id,
        class,
        name,
        device_type,
        status,
        description,
        remove,
    } = device;

    let toggle = status.toggle.clone();
    let toggle_style = if toggle.alternate { "color: red" } else { "" };
    let on_toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.toggle_scope(&id, toggle.target);
    };

    let remove_target = remove.target.clone();
    let on_remove = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.remove_device(&remove_target);
    };

    view! {
        <div id=element_id class=class>
            <span class="deviceName">{name}</span>
            <span>
                <b>{device_type.label}</b>
                " "
                {device_type.value}
            </span>
            <span>
                <b>{status.label.label}</b>
                " "
                {status.label.value}
                " ("
                <a href="#" style=toggle_style on:click=on_toggle>
                    {status.toggle.label}
                </a>
                ")"
            </span>
            <span>
                <b>{description.label}</b>
                " "
                {description.value}
            </span>
            <span class="removeDevice">
                <a href="#" on:click=on_remove>
                    {remove.label}
                </a>
            </span>
        </div>
    }
}

/// "Add a device" button plus the add-device form, hidden until the
/// button is pressed.
#[component]
pub fn AddDevicePanel() -> impl IntoView {
    let ctx = use_device_context();
    let form = use_add_device_form();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    view! {
        <div class="addDevice">
            <button type="button" on:click=move |_| ctx.show_form()>
                "Add a device"
            </button>
            <form
                id=FORM_ID
                style:display=move || form.with(|f| f.display())
                on:submit=on_submit
            >
                {FormField::ALL
                    .into_iter()
                    .map(|field| view! { <FormInput field=field /> })
                    .collect_view()}
                <input type="submit" value="Add" />
                <button type="button" on:click=move |_| ctx.hide_form()>
                    "Cancel"
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormInput(field: FormField) -> impl IntoView {
    let ctx = use_device_context();
    let form = use_add_device_form();

    view! {
        <label>
            {field.label()}
            ": "
            <input
                type="text"
                name=field.input_name()
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
        </label>
    }
}

/// Connection state and the last error, so a dropped socket is visible
/// instead of the list silently going stale.
#[component]
pub fn ConnectionBanner() -> impl IntoView {
    let connection = use_connection();
    let state = connection.state;
    let last_error = connection.last_error;

    view! {
        <div class="connection" class:stale=move || state.get().is_stale()>
            <span class="connection-state">{move || state.get().label()}</span>
            {move || {
                last_error
                    .get()
                    .map(|err| view! { <span class="connection-error">{err.to_string()}</span> })
            }}
            <Show when=move || state.get().is_stale()>
                <button type="button" on:click=move |_| connection.open()>
                    "Reconnect"
                </button>
            </Show>
        </div>
    }
}
