//! HTTP client for the extraction and submission endpoints.

use crate::error::FormError;
use crate::types::{ExtractionResponse, SubmissionPayload};
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "http://localhost:5001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Base URL of the invoice service, from `INVOICE_API_ENDPOINT` if set.
pub fn endpoint() -> String {
    load_env();
    resolve_endpoint(std::env::var("INVOICE_API_ENDPOINT").ok())
}

fn resolve_endpoint(configured: Option<String>) -> String {
    configured
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

fn client() -> Result<Client, FormError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| FormError::Transfer(e.to_string()))
}

fn transfer_error(err: reqwest::Error) -> FormError {
    if err.is_connect() || err.is_timeout() {
        FormError::Transfer("Check your connection to the invoice service and try again.".into())
    } else {
        FormError::Transfer(format!("Network error: {err}"))
    }
}

/// Send the raw document bytes to `POST {endpoint}/upload` and parse the
/// extracted invoice. The body is the file content, nothing else.
pub fn extract(base_url: &str, document_path: &str) -> Result<ExtractionResponse, FormError> {
    let bytes = fs::read(Path::new(document_path))?;

    let response = client()?
        .post(format!("{base_url}/upload"))
        .header("Content-Type", "application/octet-stream")
        .body(bytes)
        .send()
        .map_err(transfer_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(FormError::Transfer(format!(
            "Extraction failed ({status}): {}",
            if body.is_empty() { "no response body" } else { body.as_str() }
        )));
    }

    response
        .json::<ExtractionResponse>()
        .map_err(|e| FormError::MalformedResponse(e.to_string()))
}

/// Post the wire-shape invoice to `POST {endpoint}/submit` and return the
/// acknowledgment as-is. The known backend answers
/// `{"status":"success","invoice_id":N}` but nothing here depends on that.
pub fn submit(base_url: &str, payload: &SubmissionPayload) -> Result<serde_json::Value, FormError> {
    let response = client()?
        .post(format!("{base_url}/submit"))
        .json(payload)
        .send()
        .map_err(transfer_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(FormError::Transfer(format!(
            "Submission failed ({status}): {}",
            if body.is_empty() { "no response body" } else { body.as_str() }
        )));
    }

    response
        .json::<serde_json::Value>()
        .map_err(|e| FormError::MalformedResponse(e.to_string()))
}
