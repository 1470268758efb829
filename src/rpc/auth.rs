//! Authorization helpers for relay endpoints.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use reqwest::header::{HeaderName, HeaderValue};

/// Builds the relay `Authorization` value: base64 of `account_id:secret_hash`.
pub fn authorization_header(account_id: &str, secret_hash: &str) -> String {
    let credentials = format!("{account_id}:{secret_hash}");
    BASE64_STANDARD.encode(credentials)
}

pub(crate) fn validate_header(name: &str, value: &str) -> Result<()> {
    HeaderName::from_bytes(name.as_bytes())
        .with_context(|| format!("invalid header name {name:?}"))?;
    HeaderValue::from_str(value).with_context(|| format!("invalid value for header {name}"))?;
    Ok(())
}
