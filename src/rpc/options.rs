//! Client configuration: request timeout, extra headers, the debug trace flag
//! and the pluggable HTTP/logger capabilities. Everything is fixed once
//! [`RpcClientBuilder::build`] returns.

use crate::rpc::auth::validate_header;
use crate::rpc::client::RpcClient;
use crate::rpc::http::{HttpPost, ReqwestPoster};
use crate::rpc::logger::{DebugLogger, TracingLogger};
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcClientOptions {
    pub request_timeout: Duration,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Logs method, request body and response body of every call.
    pub debug: bool,
}

impl Default for RpcClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            headers: BTreeMap::new(),
            debug: false,
        }
    }
}

impl RpcClientOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than 0");
        }
        for (name, value) in &self.headers {
            validate_header(name, value)?;
        }
        Ok(())
    }
}

pub struct RpcClientBuilder {
    url: String,
    options: RpcClientOptions,
    http: Option<Arc<dyn HttpPost>>,
    logger: Option<Arc<dyn DebugLogger>>,
}

impl RpcClientBuilder {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: RpcClientOptions::default(),
            http: None,
            logger: None,
        }
    }

    pub fn options(mut self, options: RpcClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = timeout;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    /// Replaces the default `reqwest` transport.
    pub fn http_client(mut self, http: impl HttpPost + 'static) -> Self {
        self.http = Some(Arc::new(http));
        self
    }

    /// Replaces the default `tracing` sink used for the debug trace.
    pub fn logger(mut self, logger: impl DebugLogger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    pub fn build(self) -> Result<RpcClient> {
        let url = self.url.trim().to_owned();
        validate_url(&url)?;
        self.options.validate()?;

        let http: Arc<dyn HttpPost> = match self.http {
            Some(http) => http,
            None => Arc::new(ReqwestPoster::new()?),
        };
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger) as Arc<dyn DebugLogger>);

        Ok(RpcClient::from_parts(url, self.options, http, logger))
    }
}

fn validate_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("rpc url must start with http:// or https://");
    }
    Ok(())
}
