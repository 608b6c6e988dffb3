//! # devicesync_client
//!
//! Reactive Leptos client that mirrors a server's device list over a single
//! WebSocket.
//!
//! The server broadcasts ADD, REMOVE and UPDATE actions; the client keeps an
//! explicit [`DeviceStore`] of the devices it has been told about and renders
//! it as a list. User interactions (add a device, remove one, toggle its
//! scope) are sent back as actions over the same socket.
//!
//! ## Features
//!
//! - **Typed protocol**: frames are decoded into
//!   [`DeviceAction`](devicesync_common::DeviceAction) at the boundary;
//!   anything else is logged and ignored
//! - **Explicit state**: the page is a projection of [`DeviceStore`], never
//!   the other way round
//! - **Connection state**: a dropped socket is shown to the user
//! - **Optional reconnect** through [`ReconnectPolicy`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use devicesync_client::{DeviceListPage, DeviceProvider};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <DeviceProvider>
//!             <DeviceListPage />
//!         </DeviceProvider>
//!     }
//! }
//! ```
//!
//! Without Leptos, [`DeviceListClient`] offers the same behavior over any
//! transport.

// Module declarations
mod client;
mod components;
mod config;
mod connection;
mod context;
mod error;
mod form;
mod hooks;
pub mod projection;
mod provider;
mod store;

// Re-exports
pub use client::DeviceListClient;
pub use components::{
    AddDevicePanel, ConnectionBanner, DeviceCard, DeviceList, DeviceListPage, CONTENT_ID,
};
pub use config::{ClientConfig, ReconnectPolicy, DEFAULT_URL};
pub use connection::ConnectionState;
pub use context::{DeviceConnection, DeviceContext};
pub use error::DeviceSyncError;
pub use form::{AddDeviceForm, FormField, FORM_ID};
pub use hooks::{
    use_add_device_form, use_connection, use_device_context, use_devices, use_last_error,
};
pub use projection::DeviceView;
pub use provider::DeviceProvider;
pub use store::{DeviceStore, StoreChange};

// Re-export the wire types for convenience
pub use devicesync_common::{Device, DeviceAction, DeviceId, Scope};
