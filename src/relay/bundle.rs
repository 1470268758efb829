//! Request and response bodies of the relay bundle endpoints.
//!
//! Requests travel with snake_case member names and are sent as the whole
//! `params` value. Responses arrive camelCase; members the relay leaves out
//! decode to their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `blxr_simulate_bundle`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimulateBundleRequest {
    /// Raw signed transactions.
    pub transaction: Vec<String>,
    /// Hex number of the future block the bundle targets.
    pub block_number: String,
    /// Base state for the simulation: a hex block number, a block hash or a
    /// tag such as `latest`. The relay defaults to `latest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_block_number: Option<String>,
    /// Simulation timestamp in unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Body of `simulate_arb_only_bundle`: a back-run bundle tied to a trigger
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArbOnlySimulateBundleRequest {
    pub transaction_hash: String,
    pub transaction: Vec<String>,
    pub block_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_block_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Outcome of one transaction inside a simulated bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulateBundleResult {
    pub gas_used: i64,
    pub tx_hash: String,
    pub value: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulateBundleResponse {
    pub bundle_gas_price: String,
    pub bundle_hash: String,
    pub coinbase_diff: String,
    pub eth_sent_to_coinbase: String,
    pub gas_fees: String,
    pub results: Vec<SimulateBundleResult>,
    pub state_block_number: i64,
    pub total_gas_used: i64,
}

/// Simulation outcome of an arb-only bundle, with the profit split between
/// relay, miner and sender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArbOnlySimulateBundleResponse {
    pub bloxroute_diff: String,
    pub bundle_gas_price: String,
    pub bundle_hash: String,
    pub coinbase_diff: String,
    pub eth_sent_to_coinbase: String,
    pub gas_fees: String,
    pub miner_diff: String,
    pub results: Vec<SimulateBundleResult>,
    pub sender_diff: String,
    pub state_block_number: i64,
    pub total_gas_used: i64,
    pub status: String,
}

/// Body of `blxr_submit_bundle`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubmitBundleRequest {
    pub transaction: Vec<String>,
    pub block_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<u64>,
    /// Transactions allowed to revert without dropping the whole bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverting_hashes: Option<Vec<String>>,
    /// Replacement key. When set the relay answers with an empty result
    /// instead of a bundle hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontrunning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase_profit: Option<String>,
    /// Builder name to signature; an empty signature for builders that do
    /// not require one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mev_builders: Option<BTreeMap<String, String>>,
}

/// Body of `submit_arb_only_bundle`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArbOnlySubmitBundleRequest {
    pub transaction_hash: String,
    pub transaction: Vec<String>,
    pub block_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitBundleResponse {
    pub bundle_hash: String,
}

/// Body of `blxr_tx`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SendTransactionRequest {
    /// Raw signed transaction without the `0x` prefix.
    pub transaction: String,
    #[serde(skip_serializing_if = "is_false")]
    pub nonce_monitoring: bool,
    /// Network name such as `Mainnet` or `BSC-Mainnet`; the relay defaults to
    /// `Mainnet`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub blockchain_network: String,
    #[serde(skip_serializing_if = "is_false")]
    pub validators_only: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
