//! Typed wrappers over the `web3_*`, `net_*` and `eth_*` node methods.
//!
//! Every wrapper sends its arguments as a JSON array and decodes the raw
//! `result` on the way back. Hex quantities go through [`crate::codec`]; a
//! malformed quantity fails the call with
//! [`RpcError::Decode`](crate::rpc::RpcError::Decode).

use crate::codec::{int_to_hex, parse_big_int, parse_int};
use crate::eth::filter::FilterParams;
use crate::eth::request::TransactionRequest;
use crate::eth::types::{Block, Log, Syncing, Transaction, TransactionReceipt};
use crate::eth::wire::{decode_block, decode_syncing};
use crate::rpc::client::{decode_error, RpcClient};
use anyhow::Result;
use num_bigint::BigUint;
use serde_json::{json, Value};

impl RpcClient {
    /// Result decoded as a hex `i64` quantity.
    async fn quantity(&self, method: &str, params: Value) -> Result<i64> {
        let raw: String = self.request(method, params).await?;
        parse_int(&raw).map_err(|err| decode_error(method, err))
    }

    /// Result decoded as an arbitrary precision quantity.
    async fn big_quantity(&self, method: &str, params: Value) -> Result<BigUint> {
        let raw: String = self.request(method, params).await?;
        parse_big_int(&raw).map_err(|err| decode_error(method, err))
    }

    async fn block(
        &self,
        method: &str,
        params: Value,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        let result = self.call(method, params).await?;
        decode_block(result, full_transactions).map_err(|err| decode_error(method, err))
    }

    async fn logs(&self, method: &str, params: Value) -> Result<Vec<Log>> {
        let logs: Option<Vec<Log>> = self.request(method, params).await?;
        Ok(logs.unwrap_or_default())
    }

    pub async fn web3_client_version(&self) -> Result<String> {
        self.request("web3_clientVersion", json!([])).await
    }

    /// Keccak-256 (not the standardized SHA3-256) of `data`, computed by the node.
    pub async fn web3_sha3(&self, data: &[u8]) -> Result<String> {
        let encoded = format!("0x{}", hex::encode(data));
        self.request("web3_sha3", json!([encoded])).await
    }

    pub async fn net_version(&self) -> Result<String> {
        self.request("net_version", json!([])).await
    }

    pub async fn net_listening(&self) -> Result<bool> {
        self.request("net_listening", json!([])).await
    }

    pub async fn net_peer_count(&self) -> Result<i64> {
        self.quantity("net_peerCount", json!([])).await
    }

    pub async fn eth_protocol_version(&self) -> Result<String> {
        self.request("eth_protocolVersion", json!([])).await
    }

    /// Sync status. A node that is not syncing answers `false`, which decodes
    /// to a record with `is_syncing == false` and zero block numbers.
    pub async fn eth_syncing(&self) -> Result<Syncing> {
        let method = "eth_syncing";
        let result = self.call(method, json!([])).await?;
        decode_syncing(result).map_err(|err| decode_error(method, err))
    }

    pub async fn eth_coinbase(&self) -> Result<String> {
        self.request("eth_coinbase", json!([])).await
    }

    pub async fn eth_mining(&self) -> Result<bool> {
        self.request("eth_mining", json!([])).await
    }

    pub async fn eth_hashrate(&self) -> Result<i64> {
        self.quantity("eth_hashrate", json!([])).await
    }

    /// Current gas price in wei.
    pub async fn eth_gas_price(&self) -> Result<BigUint> {
        self.big_quantity("eth_gasPrice", json!([])).await
    }

    pub async fn eth_accounts(&self) -> Result<Vec<String>> {
        let accounts: Option<Vec<String>> = self.request("eth_accounts", json!([])).await?;
        Ok(accounts.unwrap_or_default())
    }

    pub async fn eth_block_number(&self) -> Result<i64> {
        self.quantity("eth_blockNumber", json!([])).await
    }

    /// Balance of `address` in wei at `block` (a number or a tag like `latest`).
    pub async fn eth_get_balance(&self, address: &str, block: &str) -> Result<BigUint> {
        self.big_quantity("eth_getBalance", json!([address, block]))
            .await
    }

    pub async fn eth_get_storage_at(
        &self,
        address: &str,
        position: u64,
        block: &str,
    ) -> Result<String> {
        self.request(
            "eth_getStorageAt",
            json!([address, int_to_hex(position), block]),
        )
        .await
    }

    pub async fn eth_get_transaction_count(&self, address: &str, block: &str) -> Result<i64> {
        self.quantity("eth_getTransactionCount", json!([address, block]))
            .await
    }

    pub async fn eth_get_block_transaction_count_by_hash(&self, hash: &str) -> Result<i64> {
        self.quantity("eth_getBlockTransactionCountByHash", json!([hash]))
            .await
    }

    pub async fn eth_get_block_transaction_count_by_number(&self, number: u64) -> Result<i64> {
        self.quantity(
            "eth_getBlockTransactionCountByNumber",
            json!([int_to_hex(number)]),
        )
        .await
    }

    pub async fn eth_get_uncle_count_by_block_hash(&self, hash: &str) -> Result<i64> {
        self.quantity("eth_getUncleCountByBlockHash", json!([hash]))
            .await
    }

    pub async fn eth_get_uncle_count_by_block_number(&self, number: u64) -> Result<i64> {
        self.quantity("eth_getUncleCountByBlockNumber", json!([int_to_hex(number)]))
            .await
    }

    pub async fn eth_get_code(&self, address: &str, block: &str) -> Result<String> {
        self.request("eth_getCode", json!([address, block])).await
    }

    pub async fn eth_sign(&self, address: &str, data: &str) -> Result<String> {
        self.request("eth_sign", json!([address, data])).await
    }

    /// Returns the transaction hash.
    pub async fn eth_send_transaction(&self, transaction: &TransactionRequest) -> Result<String> {
        self.request("eth_sendTransaction", json!([transaction]))
            .await
    }

    pub async fn eth_send_raw_transaction(&self, data: &str) -> Result<String> {
        self.request("eth_sendRawTransaction", json!([data])).await
    }

    pub async fn eth_call(&self, transaction: &TransactionRequest, block: &str) -> Result<String> {
        self.request("eth_call", json!([transaction, block])).await
    }

    pub async fn eth_estimate_gas(&self, transaction: &TransactionRequest) -> Result<i64> {
        self.quantity("eth_estimateGas", json!([transaction])).await
    }

    /// Block by hash, `None` when the node does not know it.
    ///
    /// `full_transactions` selects both the request flag and the decoded shape.
    pub async fn eth_get_block_by_hash(
        &self,
        hash: &str,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.block(
            "eth_getBlockByHash",
            json!([hash, full_transactions]),
            full_transactions,
        )
        .await
    }

    pub async fn eth_get_block_by_number(
        &self,
        number: u64,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.block(
            "eth_getBlockByNumber",
            json!([int_to_hex(number), full_transactions]),
            full_transactions,
        )
        .await
    }

    pub async fn eth_get_transaction_by_hash(&self, hash: &str) -> Result<Option<Transaction>> {
        self.request("eth_getTransactionByHash", json!([hash])).await
    }

    pub async fn eth_get_transaction_by_block_hash_and_index(
        &self,
        block_hash: &str,
        index: u64,
    ) -> Result<Option<Transaction>> {
        self.request(
            "eth_getTransactionByBlockHashAndIndex",
            json!([block_hash, int_to_hex(index)]),
        )
        .await
    }

    pub async fn eth_get_transaction_by_block_number_and_index(
        &self,
        block_number: u64,
        index: u64,
    ) -> Result<Option<Transaction>> {
        self.request(
            "eth_getTransactionByBlockNumberAndIndex",
            json!([int_to_hex(block_number), int_to_hex(index)]),
        )
        .await
    }

    /// Receipt of a mined transaction; `None` while it is still pending.
    pub async fn eth_get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>> {
        self.request("eth_getTransactionReceipt", json!([hash]))
            .await
    }

    pub async fn eth_get_compilers(&self) -> Result<Vec<String>> {
        let compilers: Option<Vec<String>> =
            self.request("eth_getCompilers", json!([])).await?;
        Ok(compilers.unwrap_or_default())
    }

    /// Installs a log filter and returns its id.
    pub async fn eth_new_filter(&self, params: &FilterParams) -> Result<String> {
        self.request("eth_newFilter", json!([params])).await
    }

    pub async fn eth_new_block_filter(&self) -> Result<String> {
        self.request("eth_newBlockFilter", json!([])).await
    }

    pub async fn eth_new_pending_transaction_filter(&self) -> Result<String> {
        self.request("eth_newPendingTransactionFilter", json!([]))
            .await
    }

    pub async fn eth_uninstall_filter(&self, filter_id: &str) -> Result<bool> {
        self.request("eth_uninstallFilter", json!([filter_id])).await
    }

    /// Logs emitted since the previous poll of `filter_id`.
    pub async fn eth_get_filter_changes(&self, filter_id: &str) -> Result<Vec<Log>> {
        self.logs("eth_getFilterChanges", json!([filter_id])).await
    }

    pub async fn eth_get_filter_logs(&self, filter_id: &str) -> Result<Vec<Log>> {
        self.logs("eth_getFilterLogs", json!([filter_id])).await
    }

    pub async fn eth_get_logs(&self, params: &FilterParams) -> Result<Vec<Log>> {
        self.logs("eth_getLogs", json!([params])).await
    }
}

