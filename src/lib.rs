pub mod codec;
pub mod eth;
pub mod relay;
pub mod rpc;
pub mod runtime;

pub use codec::{big_to_hex, int_to_hex, parse_big_int, parse_int, MalformedHex};
pub use eth::{
    eth1, Block, FilterParams, Log, Syncing, Transaction, TransactionReceipt, TransactionRequest,
};
pub use relay::{
    select_bundle_transactions, BundleSelection, SimulationBlock, SimulationTransaction,
    SkipReason,
};
pub use rpc::{authorization_header, RpcClient, RpcClientBuilder, RpcClientOptions, RpcError};
pub use runtime::telemetry::init_tracing;
