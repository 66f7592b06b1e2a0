use std::borrow::Cow;

/// Form fields for a single request, in the order they are sent.
///
/// Absent optional values never make it into the form; the service treats a
/// present-but-empty field differently from a missing one.
#[derive(Debug, Default)]
pub(crate) struct Params<'a>(Vec<(&'static str, Cow<'a, str>)>);

impl<'a> Params<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    pub(crate) fn with_optional(
        self,
        key: &'static str,
        value: Option<impl Into<Cow<'a, str>>>,
    ) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Prepends credentials. Fields that would shadow them are dropped.
    pub(crate) fn with_credentials(self, api_user: &'a str, api_key: &'a str) -> Self {
        let mut merged = Vec::with_capacity(self.0.len() + 2);
        merged.push(("api_user", Cow::Borrowed(api_user)));
        merged.push(("api_key", Cow::Borrowed(api_key)));
        merged.extend(
            self.0
                .into_iter()
                .filter(|(key, _)| *key != "api_user" && *key != "api_key"),
        );
        Self(merged)
    }
}

impl serde::Serialize for Params<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
