use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::ApiFormat;
use crate::newsletter_client::{DEFAULT_API_ENDPOINT, NewsletterApiError, NewsletterClient};

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub newsletter_api: NewsletterApiSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct NewsletterApiSettings {
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    pub api_user: String,
    pub api_key: SecretString,
    #[serde(default)]
    pub api_format: ApiFormat,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_owned()
}

impl NewsletterApiSettings {
    pub fn client(self) -> Result<NewsletterClient, NewsletterApiError> {
        let timeout = self.timeout();
        NewsletterClient::new(
            &self.api_endpoint,
            self.api_user,
            self.api_key,
            self.api_format,
            timeout,
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

/// Reads `configuration/base.yaml`, the file named after `APP_ENV`
/// (`local` by default) and `APP_`-prefixed environment variables, later
/// sources overriding earlier ones.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    load_settings(&base_path.join("configuration"), env)
}

pub fn load_settings(conf_dir: &Path, env: Environment) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(conf_dir.join(format!("{}.yaml", env.as_str()))).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
