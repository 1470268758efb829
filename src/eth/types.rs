//! Public domain records returned by the node wrappers.
//!
//! Every numeric field is already decoded from its hex wire form. Records are
//! built from their wire-shaped counterparts by explicit conversions.

use crate::eth::wire::{WireLog, WireTransaction, WireTransactionReceipt};
use num_bigint::BigUint;
use serde::Deserialize;

/// Sync status; `is_syncing == false` leaves every block number at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Syncing {
    pub is_syncing: bool,
    pub starting_block: i64,
    pub current_block: i64,
    pub highest_block: i64,
}

/// A transaction as reported by the node.
///
/// `block_number` and `transaction_index` are `None` while the transaction is
/// pending. In a hash-only block every field but `hash` is left at its default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "WireTransaction")]
pub struct Transaction {
    pub hash: String,
    pub nonce: i64,
    pub block_hash: String,
    pub block_number: Option<i64>,
    pub transaction_index: Option<i64>,
    pub from: String,
    pub to: String,
    pub value: BigUint,
    pub gas: i64,
    pub gas_price: BigUint,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "WireLog")]
pub struct Log {
    pub removed: bool,
    pub log_index: i64,
    pub transaction_index: i64,
    pub transaction_hash: String,
    pub block_number: i64,
    pub block_hash: String,
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
}

/// Receipt of a mined transaction. `contract_address` and `status` are empty
/// unless the node reported them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "WireTransactionReceipt")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_index: i64,
    pub block_hash: String,
    pub block_number: i64,
    pub cumulative_gas_used: i64,
    pub gas_used: i64,
    pub contract_address: String,
    pub logs: Vec<Log>,
    pub logs_bloom: String,
    pub root: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub number: i64,
    pub hash: String,
    pub parent_hash: String,
    pub nonce: String,
    pub sha3_uncles: String,
    pub logs_bloom: String,
    pub transactions_root: String,
    pub state_root: String,
    pub miner: String,
    pub difficulty: BigUint,
    pub total_difficulty: BigUint,
    pub extra_data: String,
    pub size: i64,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub timestamp: i64,
    pub uncles: Vec<String>,
    pub transactions: Vec<Transaction>,
}
