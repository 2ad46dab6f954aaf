use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    ProjectType,
    Message,
}

impl ContactField {
    /// Fields in the order they are validated and shown.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Organization,
        ContactField::ProjectType,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Organization => "Organization",
            ContactField::ProjectType => "Project Type",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `(value, label)` pairs of the organization select.
pub const ORGANIZATION_OPTIONS: [(&str, &str); 5] = [
    ("production", "Production Company"),
    ("cinema", "Cinema / Distribution"),
    ("cultural", "Cultural Institution"),
    ("agency", "Agency / Brand"),
    ("other", "Other"),
];

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub project_type: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Organization => &self.organization,
            ContactField::ProjectType => &self.project_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Organization => &mut self.organization,
            ContactField::ProjectType => &mut self.project_type,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// First required field that is blank, if any.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

/// JSON body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn from_draft(draft: &ContactDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            message: format!(
                "Organization: {}\nProject Type: {}\n\n{}",
                draft.organization.trim(),
                draft.project_type.trim(),
                draft.message.trim()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Nadia".into(),
            email: "nadia@example.com".into(),
            organization: "cultural".into(),
            project_type: "Archive Digitization".into(),
            message: "We have 40 reels to scan.".into(),
        }
    }

    #[test]
    fn new_draft_is_empty_and_incomplete() {
        let draft = ContactDraft::default();
        assert!(draft.is_empty());
        assert_eq!(draft.missing_field(), Some(ContactField::Name));
    }

    #[test]
    fn reports_first_blank_field() {
        let mut draft = filled();
        assert_eq!(draft.missing_field(), None);

        draft.set(ContactField::ProjectType, "   ".into());
        draft.set(ContactField::Message, String::new());
        assert_eq!(draft.missing_field(), Some(ContactField::ProjectType));
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut draft = ContactDraft::default();
        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            draft.set(field, format!("v{}", i));
        }
        assert_eq!(draft.email, "v1");
        assert_eq!(draft.get(ContactField::Message), "v4");
    }

    #[test]
    fn message_carries_labeled_lines() {
        let request = ContactRequest::from_draft(&filled());
        assert_eq!(request.name, "Nadia");
        assert_eq!(
            request.message,
            "Organization: cultural\nProject Type: Archive Digitization\n\nWe have 40 reels to scan."
        );
    }

    #[test]
    fn serializes_to_the_expected_json_shape() {
        let request = ContactRequest::from_draft(&filled());
        let value = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["email"], "nadia@example.com");
        assert!(value["message"].as_str().unwrap().starts_with("Organization: cultural"));
    }

    #[test]
    fn field_display_uses_label() {
        assert_eq!(ContactField::ProjectType.to_string(), "Project Type");
    }
}
