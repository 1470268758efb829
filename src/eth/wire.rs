//! Wire-shaped records and their field-by-field conversions into the public
//! records of [`crate::eth::types`].
//!
//! Unknown wire fields are ignored, missing or `null` ones take zero values.
//! Blocks come in two shapes (full transaction objects or bare hashes) that
//! are not self-describing, so the caller picks the decoder up front.

use crate::codec::{HexBigInt, HexInt};
use crate::eth::types::{Block, Log, Syncing, Transaction, TransactionReceipt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireSyncing {
    starting_block: HexInt,
    current_block: HexInt,
    highest_block: HexInt,
}

impl From<WireSyncing> for Syncing {
    fn from(wire: WireSyncing) -> Self {
        Syncing {
            is_syncing: true,
            starting_block: wire.starting_block.into(),
            current_block: wire.current_block.into(),
            highest_block: wire.highest_block.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireTransaction {
    hash: Option<String>,
    nonce: HexInt,
    block_hash: Option<String>,
    block_number: Option<HexInt>,
    transaction_index: Option<HexInt>,
    from: Option<String>,
    to: Option<String>,
    value: HexBigInt,
    gas: HexInt,
    gas_price: HexBigInt,
    input: Option<String>,
}

impl From<WireTransaction> for Transaction {
    fn from(wire: WireTransaction) -> Self {
        Transaction {
            hash: wire.hash.unwrap_or_default(),
            nonce: wire.nonce.into(),
            block_hash: wire.block_hash.unwrap_or_default(),
            block_number: wire.block_number.map(i64::from),
            transaction_index: wire.transaction_index.map(i64::from),
            from: wire.from.unwrap_or_default(),
            to: wire.to.unwrap_or_default(),
            value: wire.value.into(),
            gas: wire.gas.into(),
            gas_price: wire.gas_price.into(),
            input: wire.input.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireLog {
    removed: Option<bool>,
    log_index: HexInt,
    transaction_index: HexInt,
    transaction_hash: Option<String>,
    block_number: HexInt,
    block_hash: Option<String>,
    address: Option<String>,
    data: Option<String>,
    topics: Option<Vec<String>>,
}

impl From<WireLog> for Log {
    fn from(wire: WireLog) -> Self {
        Log {
            removed: wire.removed.unwrap_or_default(),
            log_index: wire.log_index.into(),
            transaction_index: wire.transaction_index.into(),
            transaction_hash: wire.transaction_hash.unwrap_or_default(),
            block_number: wire.block_number.into(),
            block_hash: wire.block_hash.unwrap_or_default(),
            address: wire.address.unwrap_or_default(),
            data: wire.data.unwrap_or_default(),
            topics: wire.topics.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireTransactionReceipt {
    transaction_hash: Option<String>,
    transaction_index: HexInt,
    block_hash: Option<String>,
    block_number: HexInt,
    cumulative_gas_used: HexInt,
    gas_used: HexInt,
    contract_address: Option<String>,
    logs: Option<Vec<Log>>,
    logs_bloom: Option<String>,
    root: Option<String>,
    status: Option<String>,
}

impl From<WireTransactionReceipt> for TransactionReceipt {
    fn from(wire: WireTransactionReceipt) -> Self {
        TransactionReceipt {
            transaction_hash: wire.transaction_hash.unwrap_or_default(),
            transaction_index: wire.transaction_index.into(),
            block_hash: wire.block_hash.unwrap_or_default(),
            block_number: wire.block_number.into(),
            cumulative_gas_used: wire.cumulative_gas_used.into(),
            gas_used: wire.gas_used.into(),
            contract_address: wire.contract_address.unwrap_or_default(),
            logs: wire.logs.unwrap_or_default(),
            logs_bloom: wire.logs_bloom.unwrap_or_default(),
            root: wire.root.unwrap_or_default(),
            status: wire.status.unwrap_or_default(),
        }
    }
}

/// Header fields shared by both block shapes.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireBlockHeader {
    number: HexInt,
    hash: Option<String>,
    parent_hash: Option<String>,
    nonce: Option<String>,
    sha3_uncles: Option<String>,
    logs_bloom: Option<String>,
    transactions_root: Option<String>,
    state_root: Option<String>,
    miner: Option<String>,
    difficulty: HexBigInt,
    total_difficulty: HexBigInt,
    extra_data: Option<String>,
    size: HexInt,
    gas_limit: HexInt,
    gas_used: HexInt,
    timestamp: HexInt,
    uncles: Option<Vec<String>>,
}

impl WireBlockHeader {
    fn with_transactions(self, transactions: Vec<Transaction>) -> Block {
        Block {
            number: self.number.into(),
            hash: self.hash.unwrap_or_default(),
            parent_hash: self.parent_hash.unwrap_or_default(),
            nonce: self.nonce.unwrap_or_default(),
            sha3_uncles: self.sha3_uncles.unwrap_or_default(),
            logs_bloom: self.logs_bloom.unwrap_or_default(),
            transactions_root: self.transactions_root.unwrap_or_default(),
            state_root: self.state_root.unwrap_or_default(),
            miner: self.miner.unwrap_or_default(),
            difficulty: self.difficulty.into(),
            total_difficulty: self.total_difficulty.into(),
            extra_data: self.extra_data.unwrap_or_default(),
            size: self.size.into(),
            gas_limit: self.gas_limit.into(),
            gas_used: self.gas_used.into(),
            timestamp: self.timestamp.into(),
            uncles: self.uncles.unwrap_or_default(),
            transactions,
        }
    }
}

/// A wire block shape that can produce a [`Block`].
pub trait WireBlock: DeserializeOwned {
    fn into_block(self) -> Block;
}

#[derive(Debug, Deserialize)]
pub struct WireBlockWithTransactions {
    #[serde(flatten)]
    header: WireBlockHeader,
    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
}

impl WireBlock for WireBlockWithTransactions {
    fn into_block(self) -> Block {
        self.header
            .with_transactions(self.transactions.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct WireBlockWithHashes {
    #[serde(flatten)]
    header: WireBlockHeader,
    #[serde(default)]
    transactions: Option<Vec<String>>,
}

impl WireBlock for WireBlockWithHashes {
    fn into_block(self) -> Block {
        let transactions = self
            .transactions
            .unwrap_or_default()
            .into_iter()
            .map(|hash| Transaction {
                hash,
                ..Transaction::default()
            })
            .collect();
        self.header.with_transactions(transactions)
    }
}

/// Decodes an `eth_syncing` result. The literal `false` short-circuits to a
/// not-syncing record without any structured decode.
pub fn decode_syncing(value: Value) -> Result<Syncing, serde_json::Error> {
    if value == Value::Bool(false) {
        return Ok(Syncing::default());
    }
    serde_json::from_value::<WireSyncing>(value).map(Syncing::from)
}

/// Decodes a block result using the shape the caller requested.
///
/// `full_transactions` must match the flag sent to the node. A `null` result
/// (unknown block) yields `None`.
pub fn decode_block(
    value: Value,
    full_transactions: bool,
) -> Result<Option<Block>, serde_json::Error> {
    if value.is_null() {
        return Ok(None);
    }
    let block = if full_transactions {
        decode_block_as::<WireBlockWithTransactions>(value)?
    } else {
        decode_block_as::<WireBlockWithHashes>(value)?
    };
    Ok(Some(block))
}

fn decode_block_as<W: WireBlock>(value: Value) -> Result<Block, serde_json::Error> {
    serde_json::from_value::<W>(value).map(WireBlock::into_block)
}
