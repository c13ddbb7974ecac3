//! Contact-form payload and submission constants.
//!
//! The form posts to an email-relay service that accepts a flat JSON object
//! of field name to value, plus underscore-prefixed control keys for the
//! subject line and mail template. Serialization happens here so the client
//! glue only has to collect `(name, value)` pairs off the form.

use serde::Serialize;
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// The relay endpoint. A single POST per submit, no retries.
pub const ENDPOINT: &str = "https://formsubmit.co/ajax/quintef.romero@gmail.com";

/// Injected `_subject` control field.
pub const SUBJECT: &str = "New portfolio inquiry";

/// Injected `_template` control field; selects the relay's table layout.
pub const TEMPLATE: &str = "table";

/// Submit-button label while a submission is in flight. The original label
/// is captured before the swap and restored afterwards.
pub const PENDING_LABEL: &str = "Sending...";

/// The JSON body sent to the relay: form fields flattened at the top level
/// alongside the two control keys.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(rename = "_subject")]
    subject: &'static str,
    #[serde(rename = "_template")]
    template: &'static str,
}

impl Payload {
    /// Build the payload from form entries in document order. A repeated
    /// field name keeps the last value, matching `Object.fromEntries`
    /// semantics on `FormData`.
    #[must_use]
    pub fn from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        Self { fields, subject: SUBJECT, template: TEMPLATE }
    }

    /// A submitted field value, for inspection.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}
