use anyhow::Context;
use sg_newsletter::{
    configuration::get_configuration,
    newsletter_client::{ApiResponse, NewsletterApiError},
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("sg_newsletter".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_configuration().context("Failed to read configuration")?;
    let client = config
        .newsletter_api
        .client()
        .context("Failed to build the newsletter API client")?;

    let newsletters = report("Newsletters", client.list_newsletters(None).await);
    let identities = report("Identities", client.list_identities(None).await);

    if !(newsletters && identities) {
        anyhow::bail!("{}", client.error_message());
    }
    Ok(())
}

fn report(resource: &str, outcome: Result<ApiResponse, NewsletterApiError>) -> bool {
    match outcome {
        Ok(ApiResponse::Json(serde_json::Value::Array(items))) => {
            tracing::info!(count = items.len(), "{} fetched", resource);
            true
        }
        Ok(response) => {
            tracing::info!(?response, "{} fetched", resource);
            true
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to fetch {}",
                resource
            );
            false
        }
    }
}
