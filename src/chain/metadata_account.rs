use borsh::BorshDeserialize;

use crate::chain::pubkey::Pubkey;
use crate::constants::METADATA_V1_KEY;
use crate::error::MetadataAccountError;

// Leading fields of a token-metadata account. Everything after `uri`
// (royalties, creators, collection, ...) is left unread.
#[derive(BorshDeserialize)]
struct MetadataPrefix {
    key: u8,
    _update_authority: Pubkey,
    mint: Pubkey,
    name: String,
    symbol: String,
    uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataAccount {
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

pub fn decode_metadata_account(data: &[u8]) -> Result<MetadataAccount, MetadataAccountError> {
    let mut buf = data;
    let prefix = MetadataPrefix::deserialize(&mut buf)?;
    if prefix.key != METADATA_V1_KEY {
        return Err(MetadataAccountError::UnexpectedKey(prefix.key));
    }

    Ok(MetadataAccount {
        mint: prefix.mint,
        name: trim_padding(&prefix.name),
        symbol: trim_padding(&prefix.symbol),
        uri: trim_padding(&prefix.uri),
    })
}

// On-chain strings are stored at fixed capacity, padded with NULs.
fn trim_padding(value: &str) -> String {
    value.trim_end_matches('\0').trim().to_string()
}
