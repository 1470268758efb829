//! The single HTTP capability the client needs: send one POST, hand back the
//! status and raw body. `ReqwestPoster` is the default; callers may plug in
//! their own implementation through [`RpcClientBuilder::http_client`].
//!
//! [`RpcClientBuilder::http_client`]: crate::rpc::options::RpcClientBuilder::http_client

use anyhow::{Context, Result};
use futures::future::BoxFuture;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one POST. Errors are surfaced to the caller untouched.
pub trait HttpPost: Send + Sync {
    fn post(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    client: reqwest::Client,
}

impl ReqwestPoster {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpPost for ReqwestPoster {
    fn post(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        Box::pin(async move {
            let HttpRequest { url, headers, body } = request;

            let mut builder = self.client.post(url).body(body);
            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse { status, body })
        })
    }
}
