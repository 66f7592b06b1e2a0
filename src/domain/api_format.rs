use serde::{Deserialize, Deserializer};

/// Wire format negotiated with the service. It selects the endpoint suffix,
/// the `Accept` header and how response bodies are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiFormat {
    #[default]
    Json,
    Xml,
}

impl ApiFormat {
    /// Anything other than `json` or `xml` falls back to JSON.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "xml" => ApiFormat::Xml,
            _ => ApiFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiFormat::Json => "json",
            ApiFormat::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ApiFormat::Json => "application/json",
            ApiFormat::Xml => "application/xml",
        }
    }
}

impl std::fmt::Display for ApiFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ApiFormat::parse_lenient(&raw))
    }
}
