//! JSON-RPC transport: request/response envelopes, HTTP and logging
//! capabilities, client options and relay authorization.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod http;
pub mod logger;
pub mod options;

pub use auth::authorization_header;
pub use client::{RpcClient, RpcError};
pub use envelope::ErrorObject;
pub use http::{HttpPost, HttpRequest, HttpResponse, ReqwestPoster};
pub use logger::{DebugLogger, TracingLogger};
pub use options::{RpcClientBuilder, RpcClientOptions};
