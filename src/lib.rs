pub mod configuration;
pub mod domain;
pub mod newsletter_client;
pub mod telemetry;
