use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// An address the newsletter service can deliver to or send from.
///
/// Surrounding whitespace is dropped before validation, so addresses pasted
/// from spreadsheets or CSV exports still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if !trimmed.validate_email() {
            return Err(format!("{s} is not a valid email address."));
        }
        if trimmed.len() == s.len() {
            return Ok(Self(s));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
