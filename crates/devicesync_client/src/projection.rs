//! Pure projection from a [`Device`] to what the page shows for it.
//!
//! Components in [`crate::components`] render a [`DeviceView`] without
//! looking at the device record again, so everything visible (texts, link
//! labels, the action a link sends) is decided here.

use devicesync_common::{Device, DeviceAction, DeviceId, Scope};

use crate::store::DeviceStore;

/// Class every device container carries, followed by the device type.
pub const DEVICE_CLASS: &str = "device";

pub const TYPE_LABEL: &str = "Type:";
pub const SCOPE_LABEL: &str = "Scope:";
pub const DESCRIPTION_LABEL: &str = "Comments:";
pub const REMOVE_LABEL: &str = "Remove device";

/// A bold label followed by free text, e.g. "Type: temp".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabeledText {
    pub label: &'static str,
    pub value: String,
}

impl LabeledText {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    /// Visible text of the region.
    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.value)
    }
}

/// Link proposing the opposite of the device's current scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToggleLink {
    pub label: &'static str,
    pub target: Scope,
    /// Drawn in the alternate (red) color; set while the device is private.
    pub alternate: bool,
}

impl ToggleLink {
    pub fn for_scope(current: Scope) -> Self {
        match current {
            Scope::Public => Self {
                label: "Make private",
                target: Scope::Private,
                alternate: false,
            },
            Scope::Private => Self {
                label: "Make public",
                target: Scope::Public,
                alternate: true,
            },
        }
    }

    /// The UPDATE a click on this link sends for device `id`.
    pub fn action(&self, id: &DeviceId) -> DeviceAction {
        DeviceAction::update(id.clone(), self.target)
    }
}

/// Scope label plus its toggle link.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StatusView {
    pub scope: Scope,
    pub label: LabeledText,
    pub toggle: ToggleLink,
}

impl StatusView {
    pub fn for_scope(scope: Scope) -> Self {
        Self {
            scope,
            label: LabeledText::new(SCOPE_LABEL, scope.as_str()),
            toggle: ToggleLink::for_scope(scope),
        }
    }

    pub fn text(&self) -> String {
        self.label.text()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoveLink {
    pub label: &'static str,
    pub target: DeviceId,
}

impl RemoveLink {
    pub fn action(&self) -> DeviceAction {
        DeviceAction::remove(self.target.clone())
    }
}

/// One region of a rendered device, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region<'a> {
    Name(&'a str),
    Type(&'a LabeledText),
    Status(&'a StatusView),
    Description(&'a LabeledText),
    Remove(&'a RemoveLink),
}

/// Everything the page renders for one device.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceView {
    pub id: DeviceId,
    /// Identifier of the container element.
    pub element_id: String,
    /// `"device <type>"`, so stylesheets can select by type.
    pub class: String,
    pub name: String,
    pub device_type: LabeledText,
    pub status: StatusView,
    pub description: LabeledText,
    pub remove: RemoveLink,
}

impl DeviceView {
    pub fn project(device: &Device) -> Self {
        Self {
            id: device.id.clone(),
            element_id: device.id.to_string(),
            class: format!("{DEVICE_CLASS} {}", device.device_type),
            name: device.name.clone(),
            device_type: LabeledText::new(TYPE_LABEL, device.device_type.clone()),
            status: StatusView::for_scope(device.scope),
            description: LabeledText::new(DESCRIPTION_LABEL, device.description.clone()),
            remove: RemoveLink {
                label: REMOVE_LABEL,
                target: device.id.clone(),
            },
        }
    }

    /// Regions in the fixed order they are appended to the container.
    pub fn regions(&self) -> [Region<'_>; 5] {
        [
            Region::Name(&self.name),
            Region::Type(&self.device_type),
            Region::Status(&self.status),
            Region::Description(&self.description),
            Region::Remove(&self.remove),
        ]
    }
}

/// Project every device in store order.
pub fn project_all(store: &DeviceStore) -> Vec<DeviceView> {
    store.iter().map(DeviceView::project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(scope: Scope) -> Device {
        Device {
            id: DeviceId::from("d1"),
            name: "Sensor A".into(),
            device_type: "temp".into(),
            scope,
            description: "hallway".into(),
        }
    }

    #[test]
    fn test_public_device_projection() {
        let view = DeviceView::project(&sensor(Scope::Public));

        assert_eq!(view.element_id, "d1");
        assert_eq!(view.class, "device temp");
        assert_eq!(view.name, "Sensor A");
        assert_eq!(view.device_type.text(), "Type: temp");
        assert_eq!(view.status.text(), "Scope: PUBLIC");
        assert_eq!(view.status.toggle.label, "Make private");
        assert_eq!(view.status.toggle.target, Scope::Private);
        assert!(!view.status.toggle.alternate);
        assert_eq!(view.description.text(), "Comments: hallway");
        assert_eq!(view.remove.label, "Remove device");
    }

    #[test]
    fn test_private_device_uses_alternate_link() {
        let view = DeviceView::project(&sensor(Scope::Private));

        assert_eq!(view.status.text(), "Scope: PRIVATE");
        assert_eq!(view.status.toggle.label, "Make public");
        assert_eq!(view.status.toggle.target, Scope::Public);
        assert!(view.status.toggle.alternate);
    }

    #[test]
    fn test_toggle_target_is_always_the_negation() {
        for scope in [Scope::Public, Scope::Private] {
            let status = StatusView::for_scope(scope);
            assert_eq!(status.toggle.target, scope.toggled());
        }
    }

    #[test]
    fn test_regions_keep_fixed_order() {
        let view = DeviceView::project(&sensor(Scope::Public));
        let regions = view.regions();

        assert!(matches!(regions[0], Region::Name("Sensor A")));
        assert!(matches!(regions[1], Region::Type(t) if t.value == "temp"));
        assert!(matches!(regions[2], Region::Status(s) if s.scope == Scope::Public));
        assert!(matches!(regions[3], Region::Description(d) if d.value == "hallway"));
        assert!(matches!(regions[4], Region::Remove(_)));
    }

    #[test]
    fn test_links_build_the_matching_actions() {
        let view = DeviceView::project(&sensor(Scope::Public));

        assert_eq!(
            view.status.toggle.action(&view.id),
            DeviceAction::update("d1", Scope::Private)
        );
        assert_eq!(view.remove.action(), DeviceAction::remove("d1"));
    }

    #[test]
    fn test_markup_in_free_text_is_kept_verbatim() {
        let mut device = sensor(Scope::Public);
        device.name = "<img src=x onerror=alert(1)>".into();

        let view = DeviceView::project(&device);

        // Rendered as a text node, so the value must not be altered or parsed.
        assert_eq!(view.name, "<img src=x onerror=alert(1)>");
    }
}
