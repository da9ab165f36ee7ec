#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};
use wallet_viewer::chain::Pubkey;
use wallet_viewer::constants::{
    METADATA_V1_KEY, PUBKEY_LEN, TOKEN_AMOUNT_OFFSET, TOKEN_DECIMALS_OFFSET, TOKEN_MINT_OFFSET,
};

pub const OWNER: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

pub fn pubkey(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; PUBKEY_LEN])
}

/// A 165-byte token account with the fields we read filled in.
pub fn token_account(mint: &Pubkey, decimals: u8, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; 165];
    data[TOKEN_MINT_OFFSET..TOKEN_MINT_OFFSET + PUBKEY_LEN].copy_from_slice(mint.as_bytes());
    data[TOKEN_DECIMALS_OFFSET] = decimals;
    data[TOKEN_AMOUNT_OFFSET..TOKEN_AMOUNT_OFFSET + 8].copy_from_slice(&amount.to_le_bytes());
    data
}

fn borsh_string(out: &mut Vec<u8>, value: &str, padded_len: usize) {
    let mut bytes = value.as_bytes().to_vec();
    bytes.resize(padded_len.max(bytes.len()), 0);
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&bytes);
}

/// A `MetadataV1` account prefix with NUL-padded strings, as stored on chain.
pub fn metadata_account(mint: &Pubkey, name: &str, symbol: &str, uri: &str) -> Vec<u8> {
    let mut data = vec![METADATA_V1_KEY];
    data.extend_from_slice(&[7u8; PUBKEY_LEN]);
    data.extend_from_slice(mint.as_bytes());
    borsh_string(&mut data, name, 32);
    borsh_string(&mut data, symbol, 10);
    borsh_string(&mut data, uri, 200);
    // seller fee basis points and the rest of the account
    data.extend_from_slice(&[0u8; 64]);
    data
}

pub fn encoded(data: &[u8]) -> Value {
    json!([general_purpose::STANDARD.encode(data), "base64"])
}

pub fn rpc_result(id: u64, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

/// `getTokenAccountsByOwner` result for `(account address, data)` pairs.
pub fn token_accounts_result(accounts: &[(Pubkey, Vec<u8>)]) -> Value {
    let value: Vec<Value> = accounts
        .iter()
        .map(|(address, data)| {
            json!({
                "pubkey": address.to_string(),
                "account": {
                    "data": encoded(data),
                    "executable": false,
                    "lamports": 2039280,
                    "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                    "rentEpoch": 361,
                    "space": data.len(),
                }
            })
        })
        .collect();
    rpc_result(1, json!({ "context": { "slot": 1 }, "value": value }))
}

/// `getMultipleAccounts` result; `None` entries become JSON null.
pub fn multiple_accounts_result(accounts: &[Option<Vec<u8>>]) -> Value {
    let value: Vec<Value> = accounts
        .iter()
        .map(|account| match account {
            Some(data) => json!({
                "data": encoded(data),
                "executable": false,
                "lamports": 5616720,
                "owner": "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s",
                "rentEpoch": 361,
            }),
            None => Value::Null,
        })
        .collect();
    rpc_result(1, json!({ "context": { "slot": 1 }, "value": value }))
}
