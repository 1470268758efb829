//! Turns a mined block into a simulation bundle.
//!
//! Transactions paying or sent by the block's coinbase are left out, the
//! rest are hex encoded in canonical form and cut to `max_tx` entries. The
//! block itself is supplied by the caller through [`SimulationBlock`], so no
//! particular transaction library is assumed here.

use crate::relay::bundle::SimulateBundleRequest;
use alloy_primitives::{Address, B256};
use anyhow::Result;
use std::fmt;

/// A transaction as the selector needs to see it.
pub trait SimulationTransaction {
    fn hash(&self) -> B256;

    /// Signer of the transaction. A failed recovery never skips the
    /// transaction.
    fn recover_sender(&self) -> Result<Address>;

    /// Declared recipient, `None` for contract creation.
    fn to(&self) -> Option<Address>;

    /// Canonical wire encoding of the signed transaction.
    fn encode_canonical(&self) -> Vec<u8>;
}

pub trait SimulationBlock {
    type Transaction: SimulationTransaction;

    fn coinbase(&self) -> Address;
    fn number(&self) -> u64;
    fn parent_hash(&self) -> B256;
    fn transactions(&self) -> &[Self::Transaction];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FromCoinbase,
    ToCoinbase,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FromCoinbase => f.write_str("from coinbase"),
            SkipReason::ToCoinbase => f.write_str("to coinbase"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSelection {
    /// `0x`-prefixed encodings in block order.
    pub transactions: Vec<String>,
    pub skipped: Vec<(B256, SkipReason)>,
}

/// Picks the transactions of `block` to replay in a simulation.
///
/// `max_tx == 0` keeps every eligible transaction. Skips are only recorded
/// for transactions looked at before the cap was reached.
pub fn select_bundle_transactions<B>(block: &B, max_tx: usize) -> BundleSelection
where
    B: SimulationBlock,
{
    let coinbase = block.coinbase();
    let mut selection = BundleSelection::default();

    for tx in block.transactions() {
        if matches!(tx.recover_sender(), Ok(sender) if sender == coinbase) {
            selection.skipped.push((tx.hash(), SkipReason::FromCoinbase));
            continue;
        }
        if tx.to() == Some(coinbase) {
            selection.skipped.push((tx.hash(), SkipReason::ToCoinbase));
            continue;
        }

        let encoded = hex::encode(tx.encode_canonical());
        let stripped = strip_length_prefix(&encoded);
        selection.transactions.push(format!("0x{stripped}"));

        if max_tx > 0 && selection.transactions.len() == max_tx {
            break;
        }
    }

    selection
}

/// Drops a leading long-string length header from a hex encoding: `b9` and
/// its two length bytes, or `b8` and its single length byte. Anything else
/// is returned unchanged.
pub fn strip_length_prefix(encoded: &str) -> &str {
    match encoded.get(..2) {
        Some("b9") => encoded.get(6..).unwrap_or_default(),
        Some("b8") => encoded.get(4..).unwrap_or_default(),
        _ => encoded,
    }
}

/// Simulation request replaying `transactions` on top of the parent state of
/// `block`.
pub fn simulate_block_request<B>(block: &B, transactions: Vec<String>) -> SimulateBundleRequest
where
    B: SimulationBlock,
{
    SimulateBundleRequest {
        transaction: transactions,
        block_number: format!("0x{:x}", block.number()),
        state_block_number: Some(format!("0x{}", hex::encode(block.parent_hash()))),
        timestamp: None,
    }
}
