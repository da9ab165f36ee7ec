use std::sync::Arc;

use tracing::{info, instrument};

use crate::chain::{decode_token_account, ChainReader, Pubkey, RpcClient};
use crate::constants::TOKEN_PROGRAM_ID;
use crate::error::FetchError;
use super::index::{AssetIndex, MetadataProgramIndex};
use super::offchain::{resolve_images, HttpMetadataFetcher, MetadataFetcher};
use super::types::{FungibleHolding, WalletHoldings};

/// Runs the read-only pipeline for one wallet address.
#[derive(Clone)]
pub struct WalletClient {
    chain: Arc<dyn ChainReader>,
    index: Arc<dyn AssetIndex>,
    metadata: Arc<dyn MetadataFetcher>,
}

impl WalletClient {
    pub fn new(rpc_url: &str) -> Self {
        let http = reqwest::Client::new();
        let chain: Arc<dyn ChainReader> =
            Arc::new(RpcClient::with_http_client(http.clone(), rpc_url));
        let index = Arc::new(MetadataProgramIndex::new(Arc::clone(&chain)));
        let metadata = Arc::new(HttpMetadataFetcher::new(http));
        WalletClient::from_parts(chain, index, metadata)
    }

    pub fn from_parts(
        chain: Arc<dyn ChainReader>,
        index: Arc<dyn AssetIndex>,
        metadata: Arc<dyn MetadataFetcher>,
    ) -> Self {
        WalletClient {
            chain,
            index,
            metadata,
        }
    }

    /// Parses `address`, then loads token balances and digital assets.
    ///
    /// Any top-level failure aborts the whole fetch; off-chain metadata
    /// failures only cost the affected asset its image.
    #[instrument(skip(self))]
    pub async fn fetch_wallet_data(&self, address: &str) -> Result<WalletHoldings, FetchError> {
        let owner: Pubkey = address.parse()?;

        let tokens = self.fetch_tokens(&owner).await?;
        let assets = self.index.digital_assets_by_owner(&owner).await?;
        let nfts = resolve_images(self.metadata.as_ref(), assets).await;

        info!(tokens = tokens.len(), nfts = nfts.len(), "wallet fetch complete");
        Ok(WalletHoldings { tokens, nfts })
    }

    async fn fetch_tokens(&self, owner: &Pubkey) -> Result<Vec<FungibleHolding>, FetchError> {
        let token_program: Pubkey = TOKEN_PROGRAM_ID.parse()?;
        let accounts = self.chain.token_accounts_by_owner(owner, &token_program).await?;

        accounts
            .iter()
            .map(|account| {
                let token = decode_token_account(&account.pubkey, &account.data)?;
                Ok(FungibleHolding {
                    mint_address: token.mint.to_string(),
                    raw_amount: token.amount,
                    symbol: None,
                    decimals: token.decimals,
                })
            })
            .collect()
    }
}
