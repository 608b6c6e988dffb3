use devicesync_common::DeviceAction;

/// Identifier of the add-device form element.
pub const FORM_ID: &str = "addDeviceForm";

/// Names of the form's input fields.
pub const NAME_FIELD: &str = "device_name";
pub const TYPE_FIELD: &str = "device_type";
pub const DESCRIPTION_FIELD: &str = "device_description";

/// A named input of the add-device form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Type, FormField::Description];

    /// The `name` attribute of the input.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => NAME_FIELD,
            FormField::Type => TYPE_FIELD,
            FormField::Description => DESCRIPTION_FIELD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Type => "Type",
            FormField::Description => "Description",
        }
    }
}

/// State of the add-device form. Hidden until the user asks for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddDeviceForm {
    pub visible: bool,
    pub name: String,
    pub device_type: String,
    pub description: String,
}

impl AddDeviceForm {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Value of the CSS `display` property for the form element.
    pub fn display(&self) -> &'static str {
        if self.visible {
            ""
        } else {
            "none"
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Type => &self.device_type,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Type => &mut self.device_type,
            FormField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.device_type.clear();
        self.description.clear();
    }

    /// Hide and clear the form, returning the ADD request built from what
    /// was typed. Values are sent as-is; the server validates them.
    pub fn submit(&mut self) -> DeviceAction {
        let action = DeviceAction::add(
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.device_type),
            std::mem::take(&mut self.description),
        );
        self.hide();
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicesync_common::Scope;

    #[test]
    fn test_form_starts_hidden() {
        let form = AddDeviceForm::default();
        assert!(!form.visible);
        assert_eq!(form.display(), "none");
    }

    #[test]
    fn test_show_and_hide() {
        let mut form = AddDeviceForm::default();
        form.show();
        assert_eq!(form.display(), "");
        form.hide();
        assert_eq!(form.display(), "none");
    }

    #[test]
    fn test_submit_hides_clears_and_builds_add() {
        let mut form = AddDeviceForm::default();
        form.show();
        form.set(FormField::Name, "Cam1");
        form.set(FormField::Type, "camera");
        form.set(FormField::Description, "front door");

        let action = form.submit();

        assert_eq!(
            action,
            DeviceAction::Add {
                id: None,
                name: "Cam1".into(),
                device_type: "camera".into(),
                scope: Scope::Public,
                description: "front door".into(),
            }
        );
        assert_eq!(form, AddDeviceForm::default());
    }

    #[test]
    fn test_empty_submit_is_not_validated() {
        let mut form = AddDeviceForm::default();
        let action = form.submit();
        assert_eq!(action, DeviceAction::add("", "", ""));
    }

    #[test]
    fn test_field_names_match_markup_contract() {
        let names: Vec<_> = FormField::ALL.iter().map(|f| f.input_name()).collect();
        assert_eq!(names, vec!["device_name", "device_type", "device_description"]);
    }

    #[test]
    fn test_reset_keeps_visibility() {
        let mut form = AddDeviceForm::default();
        form.show();
        form.set(FormField::Name, "x");
        form.reset();
        assert!(form.visible);
        assert_eq!(form.value(FormField::Name), "");
    }
}
