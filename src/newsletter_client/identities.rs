use super::params::Params;
use super::{ApiResponse, NewsletterApiError, NewsletterClient};
use crate::domain::SenderProfile;

impl NewsletterClient {
    /// Registers a sender identity titled `identity`.
    #[tracing::instrument(name = "Creating a sender identity", skip(self, profile))]
    pub async fn add_identity(
        &self,
        identity: &str,
        profile: &SenderProfile,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = profile
            .as_params()
            .into_iter()
            .fold(Params::new().with("identity", identity), |params, (key, value)| {
                params.with(key, value)
            });
        self.send("newsletter/identity/add", params).await
    }

    /// Replaces an identity's details and retitles it to `new_identity`.
    #[tracing::instrument(name = "Editing a sender identity", skip(self, profile))]
    pub async fn edit_identity(
        &self,
        identity: &str,
        new_identity: &str,
        profile: &SenderProfile,
    ) -> Result<ApiResponse, NewsletterApiError> {
        let params = profile.as_params().into_iter().fold(
            Params::new()
                .with("identity", identity)
                .with("newidentity", new_identity),
            |params, (key, value)| params.with(key, value),
        );
        self.send("newsletter/identity/edit", params).await
    }

    #[tracing::instrument(name = "Fetching a sender identity", skip(self))]
    pub async fn get_identity(&self, identity: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send(
            "newsletter/identity/get",
            Params::new().with("identity", identity),
        )
        .await
    }

    /// Lists every identity, or checks whether `identity` exists.
    #[tracing::instrument(name = "Listing sender identities", skip(self))]
    pub async fn list_identities(
        &self,
        identity: Option<&str>,
    ) -> Result<ApiResponse, NewsletterApiError> {
        self.send(
            "newsletter/identity/list",
            Params::new().with_optional("identity", identity),
        )
        .await
    }

    #[tracing::instrument(name = "Deleting a sender identity", skip(self))]
    pub async fn delete_identity(&self, identity: &str) -> Result<ApiResponse, NewsletterApiError> {
        self.send(
            "newsletter/identity/delete",
            Params::new().with("identity", identity),
        )
        .await
    }
}
