//! Wire envelopes exchanged with nodes and relays: the JSON-RPC 2.0 request
//! and response objects plus the flat `{"error": "..."}` body some relays
//! return instead of a proper envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const JSONRPC_VERSION: &str = "2.0";
pub(crate) const REQUEST_ID: u64 = 1;

#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a> {
    id: u64,
    jsonrpc: &'static str,
    method: &'a str,
    params: &'a Value,
}

impl<'a> RequestEnvelope<'a> {
    pub(crate) fn new(method: &'a str, params: &'a Value) -> Self {
        Self {
            id: REQUEST_ID,
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    pub(crate) result: Value,
    #[serde(default)]
    pub(crate) error: Option<ErrorObject>,
}

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Relay error shape, e.g. `{"error":"block param must be a hex int"}`.
///
/// A standard envelope whose `error` is an object fails to parse as this type,
/// which is how the two shapes are told apart.
#[derive(Debug, Deserialize)]
pub(crate) struct RelayErrorBody {
    #[serde(default)]
    pub(crate) error: String,
}
