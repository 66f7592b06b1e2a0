use super::params::Params;
use super::{ApiResponse, NewsletterApiError, NewsletterClient};

impl NewsletterClient {
    /// Creates a recipient list. `name` labels the column holding each
    /// recipient's name and is only sent when given.
    #[tracing::instrument(name = "Creating a recipient list", skip(self))]
    pub async fn add_list(
        &self,
        list: &str,
        name: Option<&str>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("list", list).with_optional("name", name);
        self.send("newsletter/lists/add", params).await
    }

    #[tracing::instrument(name = "Renaming a recipient list", skip(self))]
    pub async fn edit_list(
        &self,
        list: &str,
        new_list: &str,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("list", list).with("newlist", new_list);
        self.send("newsletter/lists/edit", params).await
    }

    /// Lists every recipient list, or checks whether `list` exists.
    #[tracing::instrument(name = "Fetching recipient lists", skip(self))]
    pub async fn get_lists(&self, list: Option<&str>) -> Result<ApiResponse, NewsletterApiError> {
        self.send(
            "newsletter/lists/get",
            Params::new().with_optional("list", list),
        )
        .await
    }

    #[tracing::instrument(name = "Deleting a recipient list", skip(self))]
    pub async fn delete_list(&self, list: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send("newsletter/lists/delete", Params::new().with("list", list))
            .await
    }

    /// Rows of `list`, optionally narrowed to a single address.
    #[tracing::instrument(name = "Fetching emails of a recipient list", skip(self))]
    pub async fn get_list_emails(
        &self,
        list: &str,
        email: Option<&str>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("list", list).with_optional("email", email);
        self.send("newsletter/lists/email/get", params).await
    }

    #[tracing::instrument(name = "Removing an email from a recipient list", skip(self))]
    pub async fn delete_list_emails(
        &self,
        list: &str,
        email: &str,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = Params::new().with("list", list).with("email", email);
        self.send("newsletter/lists/email/delete", params).await
    }
}
