use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FeedbackError;

/// Storage key holding the in-progress draft
pub const STORAGE_KEY: &str = "feedback_form_data";

/// Form relay endpoint the submission is posted to
pub const FORM_SUBMIT_URL: &str = "https://formspree.io/f/meejqlzw";

/// URL fragment that opens the form on load and marks it open in history
pub const FEEDBACK_FRAGMENT: &str = "#feedback";

/// Subject line sent to the relay with every submission
pub const DEFAULT_SUBJECT: &str = "New message from the feedback form";

/// Seconds a status message stays visible
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

/// The fields of the feedback form, named by their wire keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Organization,
    Message,
    PrivacyPolicy,
}

wire_name_enum!(
    FieldName,
    FeedbackError::InvalidField,
    {
        FullName => "fullName",
        Email => "email",
        Phone => "phone",
        Organization => "organization",
        Message => "message",
        PrivacyPolicy => "privacyPolicy",
    }
);

impl FieldName {
    /// Whether the field is a checkbox rather than a text input
    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldName::PrivacyPolicy)
    }
}

/// Snapshot of every form field.
///
/// This is both the live field state and the JSON document persisted under
/// [`STORAGE_KEY`]. Missing or `null` keys in a stored document read as empty
/// strings / `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub privacy_policy: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FormData {
    /// Read a text field. Returns `None` for the checkbox.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::Phone => Some(&self.phone),
            FieldName::Organization => Some(&self.organization),
            FieldName::Message => Some(&self.message),
            FieldName::PrivacyPolicy => None,
        }
    }

    /// Mutable access to a text field. Returns `None` for the checkbox.
    pub fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FullName => Some(&mut self.full_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Organization => Some(&mut self.organization),
            FieldName::Message => Some(&mut self.message),
            FieldName::PrivacyPolicy => None,
        }
    }

    /// True when every text field is empty and the checkbox is unchecked
    pub fn is_empty(&self) -> bool {
        *self == FormData::default()
    }

    /// Reset every field to empty/unchecked
    pub fn clear(&mut self) {
        *self = FormData::default();
    }
}
