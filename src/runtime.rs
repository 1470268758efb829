//! Process-level setup shared by binaries and tests embedding the client.

pub mod telemetry;
