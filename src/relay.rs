//! Relay surface: bundle bodies, the block-simulation selector and the
//! authenticated relay methods on [`crate::rpc::RpcClient`].

mod methods;

pub mod bundle;
pub mod simulate;

pub use bundle::{
    ArbOnlySimulateBundleRequest, ArbOnlySimulateBundleResponse, ArbOnlySubmitBundleRequest,
    SendTransactionRequest, SimulateBundleRequest, SimulateBundleResponse, SimulateBundleResult,
    SubmitBundleRequest, SubmitBundleResponse,
};
pub use simulate::{
    select_bundle_transactions, simulate_block_request, strip_length_prefix, BundleSelection,
    SimulationBlock, SimulationTransaction, SkipReason,
};
