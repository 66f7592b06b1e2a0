use reqwest::StatusCode;
use serde_json::Value;

use super::NewsletterApiError;
use crate::domain::ApiFormat;

/// What a successful call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The body carried a `success` field.
    Success,
    /// Any other JSON body, returned untouched.
    Json(Value),
    /// Any other XML document, returned as received.
    Xml(String),
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success)
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Whether a `success` field in the body collapses the result to
/// [`ApiResponse::Success`]. The bulk recipient import always hands back the
/// decoded body instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuccessField {
    Collapse,
    Keep,
}

/// Turns a status code and raw body into the call's outcome.
///
/// 4xx and 5xx are judged on the status alone; everything else on the
/// decoded body's `error` and `success` fields. Under XML those fields are
/// the root element's direct children.
pub(crate) fn classify(
    status: StatusCode,
    body: &str,
    format: ApiFormat,
    success_field: SuccessField,
) -> Result<ApiResponse, NewsletterApiError> {
    let body = body.trim();

    if status.is_client_error() {
        let message = upstream_error(body, format)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or(status.as_str()).to_owned());
        return Err(NewsletterApiError::Rejected(message));
    }
    if status.is_server_error() {
        return Err(NewsletterApiError::Unavailable);
    }

    match format {
        ApiFormat::Json => classify_json(body, success_field),
        ApiFormat::Xml => classify_xml(body, success_field),
    }
}

fn classify_json(
    body: &str,
    success_field: SuccessField,
) -> Result<ApiResponse, NewsletterApiError> {
    let payload = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(NewsletterApiError::Decode)?
    };

    if let Some(error) = present_field(&payload, "error") {
        return Err(NewsletterApiError::Failed(error_text(error)));
    }
    if success_field == SuccessField::Collapse && present_field(&payload, "success").is_some() {
        return Ok(ApiResponse::Success);
    }

    Ok(ApiResponse::Json(payload))
}

fn classify_xml(
    body: &str,
    success_field: SuccessField,
) -> Result<ApiResponse, NewsletterApiError> {
    if body.is_empty() {
        return Ok(ApiResponse::Xml(String::new()));
    }
    let document = roxmltree::Document::parse(body).map_err(NewsletterApiError::DecodeXml)?;

    if let Some(error) = xml_field(&document, "error") {
        return Err(NewsletterApiError::Failed(error));
    }
    if success_field == SuccessField::Collapse && xml_field(&document, "success").is_some() {
        return Ok(ApiResponse::Success);
    }

    Ok(ApiResponse::Xml(body.to_owned()))
}

fn upstream_error(body: &str, format: ApiFormat) -> Option<String> {
    match format {
        ApiFormat::Json => serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(|payload| present_field(payload, "error"))
            .map(error_text),
        ApiFormat::Xml => roxmltree::Document::parse(body)
            .ok()
            .as_ref()
            .and_then(|document| xml_field(document, "error")),
    }
}

fn present_field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

fn error_text(error: &Value) -> String {
    match error {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Text content of the first child of the root element named `name`.
/// An empty element still counts as present.
fn xml_field(document: &roxmltree::Document<'_>, name: &str) -> Option<String> {
    document
        .root_element()
        .children()
        .find(|node| node.is_element() && node.has_tag_name(name))
        .map(|node| {
            node.descendants()
                .filter(|child| child.is_text())
                .filter_map(|child| child.text())
                .collect::<String>()
                .trim()
                .to_owned()
        })
}
