use super::params::Params;
use super::{ApiResponse, NewsletterApiError, NewsletterClient};
use crate::domain::NewsletterContent;

impl NewsletterClient {
    /// Creates a newsletter sent from `identity`.
    #[tracing::instrument(name = "Creating a newsletter", skip(self, content))]
    pub async fn add_newsletter(
        &self,
        identity: &str,
        name: &str,
        content: NewsletterContent<'_>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new()
            .with("identity", identity)
            .with("name", name)
            .with("subject", content.subject)
            .with("text", content.text)
            .with("html", content.html);
        self.send("newsletter/add", params).await
    }

    /// Replaces a newsletter's identity and content, renaming it to
    /// `new_name`. Pass the current name again to keep it.
    #[tracing::instrument(name = "Editing a newsletter", skip(self, content))]
    pub async fn edit_newsletter(
        &self,
        identity: &str,
        name: &str,
        new_name: &str,
        content: NewsletterContent<'_>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new()
            .with("name", name)
            .with("newname", new_name)
            .with("identity", identity)
            .with("subject", content.subject)
            .with("text", content.text)
            .with("html", content.html);
        self.send("newsletter/edit", params).await
    }

    #[tracing::instrument(name = "Fetching a newsletter", skip(self))]
    pub async fn get_newsletter(&self, name: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/get", Params::new().with("name", name))
            .await
    }

    /// Lists every newsletter, or checks whether `name` exists.
    #[tracing::instrument(name = "Listing newsletters", skip(self))]
    pub async fn list_newsletters(
        &self,
        name: Option<&str>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        self.send(
            "newsletter/list",
            Params::new().with_optional("name", name),
        )
        .await
    }

    #[tracing::instrument(name = "Deleting a newsletter", skip(self))]
    pub async fn delete_newsletter(&self, name: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/delete", Params::new().with("name", name))
            .await
    }
}
