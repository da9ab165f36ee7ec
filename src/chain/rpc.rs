use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::chain::pubkey::Pubkey;
use crate::constants::MAX_MULTIPLE_ACCOUNTS;
use crate::error::RpcError;

/// An account address together with its raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedAccount {
    pub pubkey: Pubkey,
    pub data: Vec<u8>,
}

/// Read-only chain access used by the fetch pipeline.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// All accounts owned by `owner` under the given token program.
    async fn token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<KeyedAccount>, RpcError>;

    /// Account data for each key, `None` where the account does not exist.
    /// The result is positionally aligned with `keys`.
    async fn multiple_accounts(&self, keys: &[Pubkey]) -> Result<Vec<Option<Vec<u8>>>, RpcError>;
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
struct WithContext<T> {
    value: T,
}

#[derive(Deserialize)]
struct RpcKeyedAccount {
    pubkey: String,
    account: RpcAccount,
}

#[derive(Deserialize)]
struct RpcAccount {
    // ["<payload>", "base64"]
    data: (String, String),
}

impl RpcAccount {
    fn decode(&self) -> Result<Vec<u8>, RpcError> {
        let (payload, encoding) = &self.data;
        if encoding != "base64" {
            return Err(RpcError::Malformed(format!(
                "unexpected account encoding {}",
                encoding
            )));
        }
        Ok(general_purpose::STANDARD.decode(payload)?)
    }
}

/// Minimal JSON-RPC 2.0 client over HTTP.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), url)
    }

    pub fn with_http_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        RpcClient {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "sending RPC request");
        let response = self.http.post(&self.url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed: RpcResponse<T> =
            serde_json::from_slice(&bytes).map_err(|e| RpcError::Malformed(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(RpcError::Server {
                code: err.code,
                message: err.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| RpcError::Malformed(format!("{} response has no result", method)))
    }
}

#[async_trait]
impl ChainReader for RpcClient {
    async fn token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<KeyedAccount>, RpcError> {
        let response: WithContext<Vec<RpcKeyedAccount>> = self
            .call(
                "getTokenAccountsByOwner",
                json!([
                    owner.to_string(),
                    { "programId": program_id.to_string() },
                    { "encoding": "base64" },
                ]),
            )
            .await?;

        response
            .value
            .iter()
            .map(|keyed| {
                let pubkey = keyed
                    .pubkey
                    .parse::<Pubkey>()
                    .map_err(|e| RpcError::Malformed(e.to_string()))?;
                Ok(KeyedAccount {
                    pubkey,
                    data: keyed.account.decode()?,
                })
            })
            .collect()
    }

    async fn multiple_accounts(&self, keys: &[Pubkey]) -> Result<Vec<Option<Vec<u8>>>, RpcError> {
        let mut accounts = Vec::with_capacity(keys.len());

        for chunk in keys.chunks(MAX_MULTIPLE_ACCOUNTS) {
            let addresses: Vec<String> = chunk.iter().map(|key| key.to_string()).collect();
            let response: WithContext<Vec<Option<RpcAccount>>> = self
                .call(
                    "getMultipleAccounts",
                    json!([addresses, { "encoding": "base64" }]),
                )
                .await?;

            if response.value.len() != chunk.len() {
                return Err(RpcError::Malformed(format!(
                    "getMultipleAccounts returned {} accounts for {} keys",
                    response.value.len(),
                    chunk.len()
                )));
            }

            for account in &response.value {
                accounts.push(account.as_ref().map(RpcAccount::decode).transpose()?);
            }
        }

        Ok(accounts)
    }
}
