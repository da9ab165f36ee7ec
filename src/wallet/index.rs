use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::chain::{decode_metadata_account, decode_token_account, ChainReader, Pubkey};
use crate::constants::{METADATA_SEED, TOKEN_METADATA_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::error::FetchError;
use super::types::DigitalAsset;

/// Enumerates the digital assets held by an owner.
#[async_trait]
pub trait AssetIndex: Send + Sync {
    async fn digital_assets_by_owner(
        &self,
        owner: &Pubkey,
    ) -> Result<Vec<DigitalAsset>, FetchError>;
}

/// Finds assets straight from chain state: single-unit token accounts whose
/// mint has a token-metadata account.
#[derive(Clone)]
pub struct MetadataProgramIndex {
    chain: Arc<dyn ChainReader>,
}

impl MetadataProgramIndex {
    pub fn new(chain: Arc<dyn ChainReader>) -> Self {
        MetadataProgramIndex { chain }
    }

    async fn candidate_mints(&self, owner: &Pubkey) -> Result<Vec<Pubkey>, FetchError> {
        let token_program: Pubkey = TOKEN_PROGRAM_ID.parse()?;
        let accounts = self.chain.token_accounts_by_owner(owner, &token_program).await?;

        let mut mints = Vec::new();
        for account in &accounts {
            let token = decode_token_account(&account.pubkey, &account.data)?;
            if token.amount == 1 && !mints.contains(&token.mint) {
                mints.push(token.mint);
            }
        }
        Ok(mints)
    }
}

pub fn metadata_address(mint: &Pubkey, metadata_program: &Pubkey) -> Option<Pubkey> {
    let seeds: [&[u8]; 3] = [METADATA_SEED, metadata_program.as_bytes(), mint.as_bytes()];
    Pubkey::find_program_address(&seeds, metadata_program).map(|(address, _)| address)
}

#[async_trait]
impl AssetIndex for MetadataProgramIndex {
    async fn digital_assets_by_owner(
        &self,
        owner: &Pubkey,
    ) -> Result<Vec<DigitalAsset>, FetchError> {
        let metadata_program: Pubkey = TOKEN_METADATA_PROGRAM_ID.parse()?;
        let mints = self.candidate_mints(owner).await?;

        let addresses: Vec<Pubkey> = mints
            .iter()
            .filter_map(|mint| metadata_address(mint, &metadata_program))
            .collect();
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let accounts = self.chain.multiple_accounts(&addresses).await?;
        debug!(
            candidates = addresses.len(),
            found = accounts.iter().filter(|a| a.is_some()).count(),
            "loaded metadata accounts"
        );

        let assets = addresses
            .iter()
            .zip(accounts)
            .filter_map(|(address, data)| {
                let data = data?;
                match decode_metadata_account(&data) {
                    Ok(metadata) => Some(DigitalAsset {
                        mint_address: metadata.mint.to_string(),
                        name: metadata.name,
                        symbol: metadata.symbol,
                        uri: metadata.uri,
                    }),
                    Err(e) => {
                        warn!(account = %address, error = %e, "skipping metadata account");
                        None
                    }
                }
            })
            .collect();

        Ok(assets)
    }
}
