use std::collections::BTreeMap;

/// Values read from a submitted form, keyed by input `name`.
pub type FieldValues = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    LongText,
}

impl FieldKind {
    /// `type` attribute for `<input>`; `None` means render a `<textarea>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::LongText => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const SIMPLE_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
        placeholder: "e.g., Jane Doe",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "email",
        label: "Email",
        placeholder: "e.g., joeblow@gmail.com",
        kind: FieldKind::Email,
        required: true,
    },
];

const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
        placeholder: "e.g., Jane Doe",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "email",
        label: "Email",
        placeholder: "e.g., joeshmo@gmail.com",
        kind: FieldKind::Email,
        required: true,
    },
    FormField {
        name: "companyName",
        label: "Company Name",
        placeholder: "e.g., Acme Corp",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "message",
        label: "Message",
        placeholder: "Write your message here...",
        kind: FieldKind::LongText,
        required: false,
    },
];

/// Ordered set of fields a panel renders in its form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTemplate {
    fields: &'static [FormField],
    mark_required: bool,
}

impl FormTemplate {
    pub fn simple() -> Self {
        Self {
            fields: SIMPLE_FIELDS,
            mark_required: false,
        }
    }

    pub fn contact() -> Self {
        Self {
            fields: CONTACT_FIELDS,
            mark_required: true,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        self.fields
    }

    pub fn label_for(&self, field: &FormField) -> String {
        if self.mark_required && field.required {
            format!("*{}:", field.label)
        } else {
            format!("{}:", field.label)
        }
    }

    /// Collects one value per field, missing entries become empty strings.
    pub fn collect<F>(&self, mut lookup: F) -> FieldValues
    where
        F: FnMut(&str) -> Option<String>,
    {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), lookup(field.name).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_form_has_name_and_email_in_order() {
        let names: Vec<_> = FormTemplate::simple().fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email"]);
        assert!(FormTemplate::simple().fields().iter().all(|f| f.required));
    }

    #[test]
    fn contact_form_adds_company_and_optional_message() {
        let template = FormTemplate::contact();
        let names: Vec<_> = template.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "companyName", "message"]);

        let message = &template.fields()[3];
        assert!(!message.required);
        assert_eq!(message.kind.input_type(), None);
    }

    #[test]
    fn only_contact_labels_carry_required_marker() {
        let simple = FormTemplate::simple();
        assert_eq!(simple.label_for(&simple.fields()[0]), "Name:");

        let contact = FormTemplate::contact();
        assert_eq!(contact.label_for(&contact.fields()[2]), "*Company Name:");
        assert_eq!(contact.label_for(&contact.fields()[3]), "Message:");
    }

    #[test]
    fn collect_fills_missing_values_with_empty_strings() {
        let values = FormTemplate::contact().collect(|name| match name {
            "name" => Some("Jane Doe".into()),
            "email" => Some("jane@x.com".into()),
            _ => None,
        });
        assert_eq!(values.len(), 4);
        assert_eq!(values["name"], "Jane Doe");
        assert_eq!(values["companyName"], "");
        assert_eq!(values["message"], "");
    }
}
