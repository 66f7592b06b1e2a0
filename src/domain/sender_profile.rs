use super::EmailAddress;

/// Contact details attached to a sender identity. Newsletters are delivered
/// from this name and address, and the postal fields end up in the footer.
///
/// `email` must be a valid address. The service accepts any string, so this
/// is stricter than the wire format. The postal fields are sent untouched.
#[derive(Debug, Clone)]
pub struct SenderProfile {
    pub name: String,
    pub email: EmailAddress,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl SenderProfile {
    pub(crate) fn as_params(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_ref()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zip", self.zip.as_str()),
            ("country", self.country.as_str()),
        ]
    }
}
