use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::ExposeSecret;
use url::form_urlencoded;

use super::response::{SuccessField, classify};
use super::{ApiResponse, NewsletterApiError, NewsletterClient};
use crate::domain::Recipient;

const BULK_ADD_TIMEOUT: Duration = Duration::from_secs(30);

static ARRAY_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%5B\d+%5D").expect("ARRAY_INDEX should compile - this is a bug"));

/// Form-encodes `data` as an indexed array (`data[0]=..&data[1]=..`), the
/// way generic query builders do, then strips the indices.
pub(crate) fn encode_bulk_add_form(
    api_user: &str,
    api_key: &str,
    list: &str,
    data: &[String],
) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair("api_user", api_user)
        .append_pair("api_key", api_key)
        .append_pair("list", list);
    for (index, item) in data.iter().enumerate() {
        serializer.append_pair(&format!("data[{index}]"), item);
    }

    strip_array_indices(&serializer.finish())
}

/// The list import endpoint only accepts a flat `data[]` array. Indices are
/// removed from field names only; values are left alone.
pub(crate) fn strip_array_indices(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => format!("{}={value}", ARRAY_INDEX.replace_all(key, "%5B%5D")),
            None => ARRAY_INDEX.replace_all(pair, "%5B%5D").into_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl NewsletterClient {
    /// Adds recipients to `list` in one request.
    ///
    /// Unlike the other operations this hands back the decoded body even when
    /// it carries a `success` field, since it also reports how many rows were
    /// inserted.
    #[tracing::instrument(
        name = "Adding emails to a recipient list",
        skip(self, recipients),
        fields(recipient_count = recipients.len())
    )]
    pub async fn add_list_emails(
        &self,
        list: &str,
        recipients: &[Recipient],
    ) -> Result<ApiResponse, NewsletterApiError> {
        let outcome = self.try_add_list_emails(list, recipients).await;
        self.remember_failure(outcome)
    }

    async fn try_add_list_emails(
        &self,
        list: &str,
        recipients: &[Recipient],
    ) -> Result<ApiResponse, NewsletterApiError> {
        let data = recipients
            .iter()
            .map(|recipient| {
                recipient
                    .to_compact_json()
                    .map_err(|source| NewsletterApiError::Encode {
                        email: recipient.email().to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let body = encode_bulk_add_form(
            &self.api_user,
            self.api_key.expose_secret(),
            list,
            &data,
        );

        let response = self
            .http_client
            .post(self.endpoint_url("newsletter/lists/email/add")?)
            .timeout(BULK_ADD_TIMEOUT)
            .header(ACCEPT, self.api_format.mime_type())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "Received newsletter API response");
        let body = response.text().await?;

        classify(status, &body, self.api_format, SuccessField::Keep)
    }
}
