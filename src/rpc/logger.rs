//! Line-oriented sink for the optional debug trace (method, request body,
//! response body). Only consulted when the client's `debug` flag is set.

pub const TRACE_TARGET: &str = "relay_rpc::trace";

pub trait DebugLogger: Send + Sync {
    fn log_line(&self, line: &str);
}

/// Default sink; forwards every line to `tracing` under [`TRACE_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn log_line(&self, line: &str) {
        tracing::info!(target: TRACE_TARGET, "{line}");
    }
}
