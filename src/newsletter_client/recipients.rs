use super::params::Params;
use super::{ApiResponse, NewsletterApiError, NewsletterClient};

impl NewsletterClient {
    /// Attaches recipient list `list` to newsletter `name`.
    #[tracing::instrument(name = "Assigning a list to a newsletter", skip(self))]
    pub async fn add_recipients(
        &self,
        name: &str,
        list: &str,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("name", name).with("list", list);
        self.send("newsletter/recipients/add", params).await
    }

    #[tracing::instrument(name = "Fetching lists assigned to a newsletter", skip(self))]
    pub async fn get_recipients(&self, name: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/recipients/get", Params::new().with("name", name))
            .await
    }

    #[tracing::instrument(name = "Detaching a list from a newsletter", skip(self))]
    pub async fn delete_recipients(
        &self,
        name: &str,
        list: &str,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("name", name).with("list", list);
        self.send("newsletter/recipients/delete", params).await
    }
}
