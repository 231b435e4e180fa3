use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

/// Named contact form controls the page logic knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => FIELD_NAME,
            Field::Email => FIELD_EMAIL,
            Field::Message => FIELD_MESSAGE,
        }
    }
}

/// One submit attempt's field values, in form order.
///
/// Built fresh from the form on every submit and dropped once the request
/// resolves. Re-inserting a name overwrites the earlier value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a known field, empty when the form did not carry it.
    pub fn field(&self, field: Field) -> &str {
        self.get(field.as_str()).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = FormSubmission::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

/// JSON body returned by the form endpoint. Only a string `message` is
/// read; the body may be any JSON value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerReply {
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(message) => Some(message),
        _ => None,
    })
}

impl ServerReply {
    /// Read a reply out of any JSON value. Non-object bodies carry no
    /// message.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Server-provided message exactly as sent, ignoring blank strings.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let submission = FormSubmission::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("name", "Grace");

        assert_eq!(submission.len(), 2);
        assert_eq!(submission.field(Field::Name), "Grace");
        let order: Vec<&str> = submission.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["name", "email"]);
    }

    #[test]
    fn missing_field_reads_as_empty() {
        let submission = FormSubmission::new().with("company", "Acme");
        assert_eq!(submission.field(Field::Message), "");
        assert_eq!(submission.get("company"), Some("Acme"));
    }

    #[test]
    fn serializes_as_ordered_pairs() {
        let submission: FormSubmission = [("name", "Ada"), ("message", "hello there")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"[["name","Ada"],["message","hello there"]]"#);
    }

    #[test]
    fn reply_keeps_unknown_fields_and_message() {
        let reply: ServerReply =
            serde_json::from_str(r#"{"message":"rate limited","retry_after":30}"#).unwrap();
        assert_eq!(reply.message(), Some("rate limited"));
        assert_eq!(reply.extra.get("retry_after"), Some(&serde_json::json!(30)));
    }

    #[test]
    fn blank_message_is_ignored() {
        let reply: ServerReply = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
        assert_eq!(reply.message(), None);

        let reply: ServerReply = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(reply.message(), None);
    }

    #[test]
    fn message_is_returned_as_sent() {
        let reply: ServerReply = serde_json::from_str(r#"{"message":" rate limited "}"#).unwrap();
        assert_eq!(reply.message(), Some(" rate limited "));
    }

    #[test]
    fn non_string_message_and_non_object_bodies_carry_no_message() {
        let reply: ServerReply = serde_json::from_str(r#"{"message":42}"#).unwrap();
        assert_eq!(reply.message(), None);

        for body in [r#"[]"#, "true", r#""ok""#, "null"] {
            let value: Value = serde_json::from_str(body).unwrap();
            assert_eq!(ServerReply::from_value(value).message(), None, "body {body}");
        }
    }
}
