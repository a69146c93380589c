//! JSON-RPC 2.0 wallet bridge.
//!
//! Talks to a node whose account management is delegated to the connected
//! wallet (`eth_sendTransaction` with an unlocked/managed `from` account).
//! Chain switching is a wallet-UI capability, not a JSON-RPC method, so
//! [`WalletBridge::request_chain_switch`] always fails here; callers get
//! the remediation path instead.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ChainError, ChainResult};
use crate::traits::WalletBridge;
use crate::types::{TransactionRequest, TxHash, TxReceipt};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// JSON-RPC bridge to a single endpoint with one managed account.
pub struct JsonRpcBridge {
    client: reqwest::Client,
    rpc_url: String,
    address: Option<String>,
    next_id: AtomicU64,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: String,
    block_number: String,
    status: String,
}

impl JsonRpcBridge {
    #[must_use]
    pub fn new(rpc_url: impl Into<String>, address: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            rpc_url: rpc_url.into(),
            address,
            next_id: AtomicU64::new(1),
        }
    }

    /// Execute a call whose `result` may legitimately be `null`
    /// (e.g. a receipt lookup for an unmined transaction).
    async fn call_nullable<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> ChainResult<Option<T>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        log::debug!("[chain] {method} -> {}", self.rpc_url);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChainError::Timeout(e.to_string())
                } else {
                    ChainError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChainError::NetworkError(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(ChainError::RpcError(format!("HTTP {status}: {text}")));
        }

        let rpc: RpcResponse<T> = serde_json::from_str(&text).map_err(|e| {
            log::error!("[chain] JSON parse failed for {method}: {e}");
            ChainError::ParseError(e.to_string())
        })?;

        if let Some(err) = rpc.error {
            log::warn!("[chain] {method} failed: {} ({})", err.message, err.code);
            // -32003 transaction rejected; 4001 user rejected request
            return if err.code == -32003 || err.code == 4001 {
                Err(ChainError::Rejected(err.message))
            } else {
                Err(ChainError::RpcError(err.message))
            };
        }

        Ok(rpc.result)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> ChainResult<T> {
        self.call_nullable(method, params)
            .await?
            .ok_or_else(|| ChainError::ParseError(format!("{method}: response missing result")))
    }
}

/// Parse a 0x-prefixed hex quantity.
fn parse_hex_u64(value: &str) -> ChainResult<u64> {
    let stripped = value
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::ParseError(format!("not a hex quantity: {value}")))?;
    u64::from_str_radix(stripped, 16)
        .map_err(|e| ChainError::ParseError(format!("invalid hex quantity {value}: {e}")))
}

impl TryFrom<RawReceipt> for TxReceipt {
    type Error = ChainError;

    fn try_from(raw: RawReceipt) -> ChainResult<Self> {
        Ok(Self {
            tx_hash: TxHash(raw.transaction_hash),
            block_number: parse_hex_u64(&raw.block_number)?,
            success: parse_hex_u64(&raw.status)? == 1,
        })
    }
}

#[async_trait]
impl WalletBridge for JsonRpcBridge {
    async fn address(&self) -> Option<String> {
        self.address.clone()
    }

    async fn chain_id(&self) -> ChainResult<u64> {
        let hex: String = self.call("eth_chainId", json!([])).await?;
        parse_hex_u64(&hex)
    }

    async fn request_chain_switch(&self, chain_id: u64) -> ChainResult<()> {
        Err(ChainError::SwitchFailed(format!(
            "a JSON-RPC bridge is pinned to its endpoint; reconfigure the RPC URL for chain {chain_id}"
        )))
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> ChainResult<TxHash> {
        let params = json!([{
            "from": request.from,
            "to": request.to,
            "value": format!("0x{:x}", request.value),
            "data": format!("0x{}", hex::encode(&request.data)),
        }]);
        let hash: String = self.call("eth_sendTransaction", params).await?;
        Ok(TxHash(hash))
    }

    async fn transaction_receipt(&self, tx_hash: &TxHash) -> ChainResult<Option<TxReceipt>> {
        let raw: Option<RawReceipt> = self
            .call_nullable("eth_getTransactionReceipt", json!([tx_hash.0]))
            .await?;
        raw.map(TxReceipt::try_from).transpose()
    }
}
