//! Ethereum node surface: domain records, their wire decoders and the typed
//! method wrappers on [`crate::rpc::RpcClient`].

mod methods;
mod wire;

pub mod filter;
pub mod request;
pub mod types;

pub use filter::FilterParams;
pub use request::TransactionRequest;
pub use types::{Block, Log, Syncing, Transaction, TransactionReceipt};
pub use wire::{decode_block, decode_syncing};

use num_bigint::BigUint;

const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

/// One ether in wei (10^18).
pub fn eth1() -> BigUint {
    BigUint::from(WEI_PER_ETH)
}
