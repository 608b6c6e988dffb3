//! Device list page.
//!
//! Run a server that speaks the device action protocol on
//! `ws://localhost:8080/402_NRAS_WS/actions`, then:
//!
//!   cd demos/device_list
//!   trunk serve --open

use devicesync_client::{ClientConfig, DeviceListPage, DeviceProvider, ReconnectPolicy};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = ClientConfig::default().with_reconnect(ReconnectPolicy::Limited {
        attempts: 3,
        interval_ms: 3000,
    });

    view! {
        <DeviceProvider config=config>
            <h1>"Devices"</h1>
            <DeviceListPage />
        </DeviceProvider>
    }
}
