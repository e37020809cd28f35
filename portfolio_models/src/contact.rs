use nutype::nutype;
use serde_json::Value;
use thiserror::Error;

use crate::{email_address::EmailAddress, trim_text};

/// A contact form submission exactly as the client sent it.
///
/// Every field may be missing or hold any JSON value. Use
/// [`ContactMessage::try_from`] to turn it into a validated message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawContactMessage {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl From<Value> for RawContactMessage {
    /// Anything that is not a JSON object carries no fields at all.
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
            message: fields.remove("message"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(with = trim_text),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(with = trim_text),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactMessageError {
    #[error("Name, email, and message are required.")]
    MissingFields,
    #[error("Invalid email.")]
    InvalidEmail,
}

impl TryFrom<RawContactMessage> for ContactMessage {
    type Error = ContactMessageError;

    fn try_from(raw: RawContactMessage) -> Result<Self, Self::Error> {
        let name = ContactMessageAuthorName::try_new(coerce(raw.name));
        let email = trim_text(coerce(raw.email));
        let content = ContactMessageContent::try_new(coerce(raw.message));

        let (Ok(name), Ok(content)) = (name, content) else {
            return Err(ContactMessageError::MissingFields);
        };
        if email.is_empty() {
            return Err(ContactMessageError::MissingFields);
        }

        let email =
            EmailAddress::try_new(email).map_err(|_| ContactMessageError::InvalidEmail)?;

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            content,
        })
    }
}

/// Only JSON strings carry text. Everything else counts as missing.
fn coerce(value: Option<Value>) -> String {
    match value {
        Some(Value::String(value)) => value,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use portfolio_utils::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn raw(name: Value, email: Value, message: Value) -> RawContactMessage {
        RawContactMessage {
            name: Some(name),
            email: Some(email),
            message: Some(message),
        }
    }

    #[test]
    fn from_json_object() {
        let result = RawContactMessage::from(json!({
            "name": "Ada",
            "email": 42,
            "subject": "ignored",
        }));

        assert_eq!(
            result,
            RawContactMessage {
                name: Some(json!("Ada")),
                email: Some(json!(42)),
                message: None,
            }
        );
    }

    #[test]
    fn from_json_non_object() {
        for value in [json!(null), json!([1, 2]), json!("Ada"), json!(true)] {
            assert_eq!(RawContactMessage::from(value), RawContactMessage::default());
        }
    }

    #[test]
    fn ok() {
        let result = ContactMessage::try_from(raw(
            json!("  Ada Lovelace "),
            json!(" ada@example.com"),
            json!("\nHello\n"),
        ))
        .unwrap();

        assert_eq!(*result.author.name, "Ada Lovelace");
        assert_eq!(*result.author.email, "ada@example.com");
        assert_eq!(*result.content, "Hello");
    }

    #[test]
    fn missing_fields() {
        for input in [
            RawContactMessage::default(),
            raw(json!(""), json!("ada@example.com"), json!("Hello")),
            raw(json!("Ada"), json!("   "), json!("Hello")),
            raw(json!("Ada"), json!("ada@example.com"), json!(" \t\n")),
            raw(json!(null), json!("ada@example.com"), json!("Hello")),
            raw(json!(7), json!("ada@example.com"), json!("Hello")),
            raw(json!("Ada"), json!(["ada@example.com"]), json!("Hello")),
            raw(json!("Ada"), json!("ada@example.com"), json!({"text": "Hello"})),
            raw(json!("Ada"), json!("ada@example.com"), json!(false)),
            raw(json!("\u{FEFF}"), json!("ada@example.com"), json!("Hello")),
            raw(json!("Ada"), json!("\u{FEFF} "), json!("Hello")),
            raw(json!("Ada"), json!("ada@example.com"), json!("\u{FEFF}\n")),
        ] {
            let result = ContactMessage::try_from(input);
            assert_matches!(result, Err(ContactMessageError::MissingFields));
        }
    }

    #[test]
    fn missing_fields_before_invalid_email() {
        let result = ContactMessage::try_from(raw(json!(""), json!("not-an-email"), json!("Hi")));
        assert_matches!(result, Err(ContactMessageError::MissingFields));
    }

    #[test]
    fn invalid_email() {
        for email in ["not-an-email", "a@b", "@b.com", "ada @example.com"] {
            let result = ContactMessage::try_from(raw(json!("Ada"), json!(email), json!("Hello")));
            assert_matches!(result, Err(ContactMessageError::InvalidEmail));
        }
    }
}
