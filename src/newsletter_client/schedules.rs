use super::params::Params;
use super::{ApiResponse, NewsletterApiError, NewsletterClient};
use crate::domain::DeliveryTime;

impl NewsletterClient {
    /// Schedules delivery of newsletter `name`.
    ///
    /// `at` is an absolute time in any format [`DeliveryTime`] understands;
    /// `after` is a delay in minutes. `at` wins when both are given, and with
    /// neither the service sends immediately.
    #[tracing::instrument(name = "Scheduling a newsletter", skip(self))]
    pub async fn add_schedule(
        &self,
        name: &str,
        at: Option<&str>,
        after: Option<u32>,
    ) -> Result<(), NewsletterApiError> {
        let params = Params::new().with("name", name);
        let params = match (at, after) {
            (Some(at), _) => {
                let at = self.remember_failure(DeliveryTime::parse(at).map_err(Into::into))?;
                params.with("at", at.to_iso8601())
            }
            (None, Some(minutes)) => params.with("after", minutes.to_string()),
            (None, None) => params,
        };

        self.send("newsletter/schedule/add", params)
            .await
            .map(|_| ())
    }

    #[tracing::instrument(name = "Fetching a newsletter schedule", skip(self))]
    pub async fn get_schedule(&self, name: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/schedule/get", Params::new().with("name", name))
            .await
    }

    /// Cancels a scheduled delivery.
    #[tracing::instrument(name = "Cancelling a newsletter schedule", skip(self))]
    pub async fn delete_schedule(&self, name: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/schedule/delete", Params::new().with("name", name))
            .await
    }
}
