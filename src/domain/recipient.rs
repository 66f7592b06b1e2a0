use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::EmailAddress;

/// One row of a recipient list: an address plus any custom columns the list
/// defines (`name`, `custom1`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    email: EmailAddress,
    fields: BTreeMap<String, String>,
}

impl Recipient {
    pub fn new(email: EmailAddress) -> Self {
        Self {
            email,
            fields: BTreeMap::new(),
        }
    }

    /// Validates and trims the address first. The service itself would
    /// accept any string here, so malformed addresses fail locally instead.
    pub fn parse(email: String) -> Result<Self, String> {
        Ok(Self::new(EmailAddress::parse(email)?))
    }

    /// Sets a custom column. The `email` column always comes from the
    /// recipient's address and cannot be overridden here.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key != "email" {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The compact object notation the bulk-add endpoint expects for each
    /// element of `data[]`, e.g. `{"email":"a@b.com","name":"X"}`.
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for Recipient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("email", self.email.as_ref())?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
