//! JSON-RPC transport shared by the node and relay method wrappers. Houses
//! `RpcClient`, the error taxonomy and the two call paths: `call` for plain
//! nodes and `call_with_auth` for relays that may answer with a flat error
//! body instead of an envelope.

use crate::rpc::envelope::{RelayErrorBody, RequestEnvelope, ResponseEnvelope};
use crate::rpc::http::{HttpPost, HttpRequest};
use crate::rpc::logger::DebugLogger;
use crate::rpc::options::{RpcClientBuilder, RpcClientOptions};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fmt, sync::Arc};
use tokio::time::timeout;

#[derive(Debug)]
pub enum RpcError {
    Timeout { method: String },
    /// A node answered with a JSON-RPC error object.
    Protocol { code: i64, message: String },
    /// A relay reported an error, through either its flat body or its envelope.
    Relay(String),
    /// The body, or the record inside it, did not have the expected shape.
    Decode { method: String, reason: String },
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Timeout { method } => write!(f, "rpc method {method} timed out"),
            RpcError::Protocol { code, message } => write!(f, "Error {code} ({message})"),
            RpcError::Relay(message) => write!(f, "relay error response: {message}"),
            RpcError::Decode { method, reason } => {
                write!(f, "failed to decode {method} response: {reason}")
            }
        }
    }
}

impl std::error::Error for RpcError {}

#[derive(Clone)]
pub struct RpcClient {
    url: Arc<String>,
    options: RpcClientOptions,
    http: Arc<dyn HttpPost>,
    logger: Arc<dyn DebugLogger>,
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &self.url)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RpcClient {
    /// Client with default options, `reqwest` transport and `tracing` logger.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::builder(url).build()
    }

    pub fn builder(url: impl Into<String>) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    pub(crate) fn from_parts(
        url: String,
        options: RpcClientOptions,
        http: Arc<dyn HttpPost>,
        logger: Arc<dyn DebugLogger>,
    ) -> Self {
        Self {
            url: Arc::new(url),
            options,
            http,
            logger,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &RpcClientOptions {
        &self.options
    }

    /// Sends `method` to a plain node and returns the raw `result` member.
    ///
    /// An `error` member in the envelope becomes [`RpcError::Protocol`].
    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let data = self.exchange(method, &params, None).await?;
        let envelope = parse_envelope(method, &data)?;

        if let Some(error) = envelope.error {
            return Err(RpcError::Protocol {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        Ok(envelope.result)
    }

    /// Like [`RpcClient::call`], with an `Authorization` header, for relay endpoints.
    ///
    /// The flat `{"error": "..."}` body is checked before any envelope parsing;
    /// both that body and an envelope error surface as [`RpcError::Relay`].
    pub async fn call_with_auth(
        &self,
        method: &str,
        auth_header: &str,
        params: Value,
    ) -> Result<Value> {
        let data = self.exchange(method, &params, Some(auth_header)).await?;

        if let Ok(flat) = serde_json::from_slice::<RelayErrorBody>(&data) {
            if !flat.error.is_empty() {
                return Err(RpcError::Relay(flat.error).into());
            }
        }

        let envelope = parse_envelope(method, &data)?;
        if let Some(error) = envelope.error {
            return Err(RpcError::Relay(error.message).into());
        }

        Ok(envelope.result)
    }

    pub(crate) async fn request<T>(&self, method: &str, params: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self.call(method, params).await?;
        decode_result(method, result)
    }

    /// Writes one line to the debug logger when the debug flag is set.
    pub(crate) fn trace(&self, line: impl FnOnce() -> String) {
        if self.options.debug {
            self.logger.log_line(&line());
        }
    }

    async fn exchange(
        &self,
        method: &str,
        params: &Value,
        auth_header: Option<&str>,
    ) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(&RequestEnvelope::new(method, params))
            .with_context(|| format!("failed to serialize {method} request"))?;

        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];
        if let Some(auth) = auth_header {
            headers.push(("Authorization".to_owned(), auth.to_owned()));
        }
        headers.extend(
            self.options
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        let request = HttpRequest {
            url: self.url.to_string(),
            headers,
            body: body.clone(),
        };

        // The client owns the deadline; a transport that times out on its
        // own is reported the same way.
        let response = match timeout(self.options.request_timeout, self.http.post(request)).await
        {
            Ok(result) => result.map_err(|err| classify_transport_error(method, err))?,
            Err(_) => {
                return Err(RpcError::Timeout {
                    method: method.to_owned(),
                }
                .into())
            }
        };

        tracing::debug!(
            method,
            status = response.status,
            bytes = response.body.len(),
            "rpc call completed"
        );

        self.trace(|| {
            format!(
                "{method}\nRequest: {}\nResponse: {}\n",
                String::from_utf8_lossy(&body),
                String::from_utf8_lossy(&response.body)
            )
        });

        Ok(response.body)
    }
}

fn classify_transport_error(method: &str, err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<reqwest::Error>() {
        Some(transport) if transport.is_timeout() => RpcError::Timeout {
            method: method.to_owned(),
        }
        .into(),
        _ => err,
    }
}

fn parse_envelope(method: &str, data: &[u8]) -> Result<ResponseEnvelope> {
    serde_json::from_slice(data).map_err(|err| decode_error(method, err))
}

pub(crate) fn decode_result<T>(method: &str, result: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(result).map_err(|err| decode_error(method, err))
}

pub(crate) fn decode_error(method: &str, reason: impl fmt::Display) -> anyhow::Error {
    RpcError::Decode {
        method: method.to_owned(),
        reason: reason.to_string(),
    }
    .into()
}
