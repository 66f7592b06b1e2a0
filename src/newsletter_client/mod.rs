//! Client for the newsletter service's HTTP API.
//!
//! Every operation is a single form-encoded POST to
//! `<api_endpoint><resource>.<format>` carrying the account credentials. The
//! per-resource operations live in the submodules; this module owns the
//! client's configuration and the shared request envelope.

mod bulk;
mod error;
mod identities;
mod lists;
mod newsletters;
mod params;
mod recipients;
mod response;
mod schedules;

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::domain::ApiFormat;

pub use error::{NewsletterApiError, error_chain_fmt};
pub use response::ApiResponse;

use params::Params;
use response::{SuccessField, classify};

pub const DEFAULT_API_ENDPOINT: &str = "https://sendgrid.com/api/";

pub struct NewsletterClient {
    http_client: Client,
    api_endpoint: Url,
    api_user: String,
    api_key: SecretString,
    api_format: ApiFormat,
    last_error: Mutex<String>,
}

impl NewsletterClient {
    pub fn new(
        api_endpoint: &str,
        api_user: String,
        api_key: SecretString,
        api_format: ApiFormat,
        timeout: Duration,
    ) -> Result<Self, NewsletterApiError> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            api_endpoint: parse_endpoint(api_endpoint)?,
            api_user,
            api_key,
            api_format,
            last_error: Mutex::new(String::new()),
        })
    }

    /// Re-applies settings from loose key/value pairs.
    ///
    /// Only `api_user`, `api_key`, `api_endpoint` and `api_format` are
    /// recognised; other keys are ignored. Unknown formats fall back to JSON.
    /// An endpoint that does not parse is reported after the remaining keys
    /// have been applied, and the previous endpoint is kept.
    pub fn initialize<I, K, V>(&mut self, params: I) -> Result<(), NewsletterApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut endpoint_error = None;

        for (key, value) in params {
            match key.as_ref() {
                "api_user" => self.api_user = value.into(),
                "api_key" => self.api_key = SecretString::from(value.into()),
                "api_format" => self.api_format = ApiFormat::parse_lenient(&value.into()),
                "api_endpoint" => match parse_endpoint(&value.into()) {
                    Ok(endpoint) => self.api_endpoint = endpoint,
                    Err(e) => endpoint_error = Some(e),
                },
                other => tracing::debug!(key = other, "Ignoring unrecognised client setting"),
            }
        }

        match endpoint_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    pub fn api_format(&self) -> ApiFormat {
        self.api_format
    }

    pub fn api_endpoint(&self) -> &Url {
        &self.api_endpoint
    }

    pub fn api_user(&self) -> &str {
        &self.api_user
    }

    /// Display text of the most recent failed call, or an empty string if no
    /// call has failed yet. Concurrent calls overwrite each other's message;
    /// prefer the `Err` each operation returns.
    pub fn error_message(&self) -> String {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn remember_failure<T>(
        &self,
        outcome: Result<T, NewsletterApiError>,
    ) -> Result<T, NewsletterApiError> {
        if let Err(e) = &outcome {
            tracing::warn!(error.message = %e, "Newsletter API call failed");
            *self
                .last_error
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = e.to_string();
        }
        outcome
    }

    fn endpoint_url(&self, resource: &str) -> Result<Url, NewsletterApiError> {
        let path = format!("{resource}.{}", self.api_format);
        Ok(self.api_endpoint.join(&path)?)
    }

    /// Posts `params` plus credentials to `resource` and classifies the
    /// answer.
    #[tracing::instrument(name = "Calling the newsletter API", skip(self, params))]
    async fn send(
        &self,
        resource: &str,
        params: Params<'_>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let outcome = self.try_send(resource, params).await;
        self.remember_failure(outcome)
    }

    async fn try_send(
        &self,
        resource: &str,
        params: Params<'_>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let url = self.endpoint_url(resource)?;
        let form = params.with_credentials(&self.api_user, self.api_key.expose_secret());

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, self.api_format.mime_type())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "Received newsletter API response");
        let body = response.text().await?;

        classify(status, &body, self.api_format, SuccessField::Collapse)
    }
}

impl std::fmt::Debug for NewsletterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterClient")
            .field("api_endpoint", &self.api_endpoint.as_str())
            .field("api_user", &self.api_user)
            .field("api_key", &self.api_key)
            .field("api_format", &self.api_format)
            .finish_non_exhaustive()
    }
}

/// Relative resource paths must land beneath the endpoint, so a missing
/// trailing slash is added before parsing.
fn parse_endpoint(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}
