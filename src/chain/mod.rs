// Read-only access to the chain: addresses, RPC, and account layouts.

mod metadata_account;
mod pubkey;
mod rpc;
mod token_account;

pub use metadata_account::{decode_metadata_account, MetadataAccount};
pub use pubkey::Pubkey;
pub use rpc::{ChainReader, KeyedAccount, RpcClient};
pub use token_account::{decode_token_account, TokenAccountData};

#[cfg(test)]
pub(crate) use token_account::encode_token_account;
