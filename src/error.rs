use thiserror::Error;

/// Failure to turn user input into a public key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid public key input: {0}")]
    InvalidBase58(String),
    #[error("Invalid public key input: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Errors raised while talking to the JSON-RPC endpoint.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("RPC endpoint returned HTTP {0}")]
    Status(u16),
    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },
    #[error("Malformed RPC response: {0}")]
    Malformed(String),
    #[error("Invalid account data encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
}

/// Raised when an account buffer does not match the layout we read from it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Account {account} data is {actual} bytes, expected at least {expected}")]
    TooShort {
        account: String,
        actual: usize,
        expected: usize,
    },
}

/// Top-level pipeline failure; its message is what the error banner shows.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Per-asset off-chain metadata failure. Never reaches the user.
#[derive(Debug, Error)]
pub enum MetadataFetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A metadata-program account that is not a readable `MetadataV1`.
#[derive(Debug, Error)]
pub enum MetadataAccountError {
    #[error("unexpected account key {0}")]
    UnexpectedKey(u8),
    #[error("undecodable metadata account: {0}")]
    Borsh(#[from] std::io::Error),
}
