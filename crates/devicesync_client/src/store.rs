//! Explicit client-side record of the devices the server has announced.
//!
//! The store is the source of truth for the page; the markup is projected
//! from it (see [`crate::projection`]).

use std::collections::HashMap;

use devicesync_common::{Device, DeviceAction, DeviceId, Scope};

use crate::error::DeviceSyncError;

/// Effect of applying one inbound action to a [`DeviceStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreChange {
    /// A new device was appended.
    Added(DeviceId),
    /// An ADD named a device that already existed; its record was replaced
    /// in place.
    Replaced(DeviceId),
    Removed(DeviceId),
    /// A REMOVE named a device that was not present.
    Unchanged(DeviceId),
    ScopeChanged { id: DeviceId, scope: Scope },
}

/// Devices keyed by id, iterated in the order they were first added.
///
/// Ids are keyed by their rendered form, which is also the element id on the
/// page, so `3` and `"3"` name the same device. The record keeps the id as
/// it was announced so requests echo it back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceStore {
    devices: HashMap<String, Device>,
    order: Vec<String>,
}

fn store_key(id: &DeviceId) -> String {
    id.to_string()
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.get(&store_key(id))
    }

    pub fn contains(&self, id: &DeviceId) -> bool {
        self.devices.contains_key(&store_key(id))
    }

    /// Devices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.order.iter().filter_map(|key| self.devices.get(key))
    }

    /// Apply an inbound action.
    ///
    /// REMOVE of an unknown id is not an error. UPDATE of an unknown id is,
    /// since it means this client missed the ADD.
    pub fn apply(&mut self, action: DeviceAction) -> Result<StoreChange, DeviceSyncError> {
        match action {
            DeviceAction::Add {
                id,
                name,
                device_type,
                scope,
                description,
            } => {
                let id = id.ok_or(DeviceSyncError::MissingId)?;
                Ok(self.upsert(Device {
                    id,
                    name,
                    device_type,
                    scope,
                    description,
                }))
            }
            DeviceAction::Remove { id } => Ok(match self.remove(&id) {
                Some(_) => StoreChange::Removed(id),
                None => StoreChange::Unchanged(id),
            }),
            DeviceAction::Update { id, scope } => {
                let device = self
                    .devices
                    .get_mut(&store_key(&id))
                    .ok_or_else(|| DeviceSyncError::UnknownDevice { id: id.clone() })?;
                device.scope = scope;
                Ok(StoreChange::ScopeChanged { id, scope })
            }
        }
    }

    /// Insert `device`, replacing any record with the same id without
    /// moving it.
    pub fn upsert(&mut self, device: Device) -> StoreChange {
        let id = device.id.clone();
        let key = store_key(&id);
        match self.devices.insert(key.clone(), device) {
            Some(_) => StoreChange::Replaced(id),
            None => {
                self.order.push(key);
                StoreChange::Added(id)
            }
        }
    }

    pub fn remove(&mut self, id: &DeviceId) -> Option<Device> {
        let key = store_key(id);
        let removed = self.devices.remove(&key)?;
        self.order.retain(|existing| *existing != key);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.devices.clear();
        self.order.clear();
    }
}
