use std::error::Error;

use crate::domain::ScheduleTimeError;

pub(crate) const UNAVAILABLE_MESSAGE: &str =
    "Access to the newsletter service failed. Please try again later.";

#[derive(thiserror::Error)]
pub enum NewsletterApiError {
    /// The service refused the request with a 4xx status.
    #[error("{0}.")]
    Rejected(String),
    /// The service answered with a 5xx status. Upstream detail is dropped.
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,
    /// A 2xx response whose body still carried an `error` field.
    #[error("{0}.")]
    Failed(String),
    #[error("Failed to reach the newsletter service.")]
    Transport(#[from] reqwest::Error),
    #[error("The newsletter service returned a malformed response.")]
    Decode(#[source] serde_json::Error),
    #[error("The newsletter service returned a malformed response.")]
    DecodeXml(#[source] roxmltree::Error),
    #[error("Failed to encode recipient {email}.")]
    Encode {
        email: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    InvalidScheduleTime(#[from] ScheduleTimeError),
    #[error("Invalid newsletter API endpoint.")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl std::fmt::Debug for NewsletterApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}
