//! Authenticated relay calls on [`RpcClient`]: bundle simulation and
//! submission, block replay and single transaction sends.

use crate::relay::bundle::{
    ArbOnlySimulateBundleRequest, ArbOnlySimulateBundleResponse, ArbOnlySubmitBundleRequest,
    SendTransactionRequest, SimulateBundleRequest, SimulateBundleResponse, SubmitBundleRequest,
    SubmitBundleResponse,
};
use crate::relay::simulate::{select_bundle_transactions, simulate_block_request, SimulationBlock};
use crate::rpc::client::{decode_result, RpcClient};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `blxr_tx` answers with either the bare hash or an object carrying it.
#[derive(Deserialize)]
#[serde(untagged)]
enum SentTransaction {
    Hash(String),
    Object {
        #[serde(rename = "txHash")]
        tx_hash: String,
    },
}

impl RpcClient {
    async fn relay_request<P, T>(&self, method: &str, auth_header: &str, params: &P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let params = serde_json::to_value(params)
            .with_context(|| format!("failed to serialize {method} params"))?;
        let result = self.call_with_auth(method, auth_header, params).await?;
        decode_result(method, result)
    }

    pub async fn simulate_bundle(
        &self,
        auth_header: &str,
        request: &SimulateBundleRequest,
    ) -> Result<SimulateBundleResponse> {
        self.relay_request("blxr_simulate_bundle", auth_header, request)
            .await
    }

    pub async fn simulate_arb_only_bundle(
        &self,
        auth_header: &str,
        request: &ArbOnlySimulateBundleRequest,
    ) -> Result<ArbOnlySimulateBundleResponse> {
        self.relay_request("simulate_arb_only_bundle", auth_header, request)
            .await
    }

    /// Submits a bundle. A request carrying a `uuid` gets an empty result
    /// back, which yields a response with an empty `bundle_hash`.
    pub async fn submit_bundle(
        &self,
        auth_header: &str,
        request: &SubmitBundleRequest,
    ) -> Result<SubmitBundleResponse> {
        self.submit("blxr_submit_bundle", auth_header, request).await
    }

    pub async fn submit_arb_only_bundle(
        &self,
        auth_header: &str,
        request: &ArbOnlySubmitBundleRequest,
    ) -> Result<SubmitBundleResponse> {
        self.submit("submit_arb_only_bundle", auth_header, request)
            .await
    }

    async fn submit<P: Serialize>(
        &self,
        method: &str,
        auth_header: &str,
        request: &P,
    ) -> Result<SubmitBundleResponse> {
        let result: Value = self.relay_request(method, auth_header, request).await?;
        match result {
            Value::Null => Ok(SubmitBundleResponse::default()),
            Value::String(text) if text.is_empty() => Ok(SubmitBundleResponse::default()),
            other => decode_result(method, other),
        }
    }

    /// Replays a mined block through `blxr_simulate_bundle`, without the
    /// transactions involving its coinbase. `max_tx == 0` sends them all.
    pub async fn simulate_block<B>(
        &self,
        auth_header: &str,
        block: &B,
        max_tx: usize,
    ) -> Result<SimulateBundleResponse>
    where
        B: SimulationBlock,
    {
        self.trace(|| {
            format!(
                "Simulating block {} (0x{:x}) with {} tx",
                block.number(),
                block.number(),
                block.transactions().len()
            )
        });

        let selection = select_bundle_transactions(block, max_tx);
        for (hash, reason) in &selection.skipped {
            self.trace(|| format!("- skip tx {reason}: {hash}"));
        }

        tracing::debug!(
            block = block.number(),
            selected = selection.transactions.len(),
            skipped = selection.skipped.len(),
            "simulating block"
        );
        self.trace(|| {
            format!(
                "sending {} tx for simulation to {}",
                selection.transactions.len(),
                self.url()
            )
        });

        let request = simulate_block_request(block, selection.transactions);
        self.simulate_bundle(auth_header, &request).await
    }

    /// Sends one raw transaction through `blxr_tx` and returns its hash.
    pub async fn send_transaction(
        &self,
        auth_header: &str,
        request: &SendTransactionRequest,
    ) -> Result<String> {
        let sent: SentTransaction = self.relay_request("blxr_tx", auth_header, request).await?;
        Ok(match sent {
            SentTransaction::Hash(hash) => hash,
            SentTransaction::Object { tx_hash } => tx_hash,
        })
    }
}
