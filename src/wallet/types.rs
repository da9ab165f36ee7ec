// Value types produced by the fetch pipeline

use crate::utils::format_token_amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungibleHolding {
    pub mint_address: String,
    pub raw_amount: u64,
    pub symbol: Option<String>,
    pub decimals: u8,
}

impl FungibleHolding {
    pub fn display_amount(&self) -> String {
        format_token_amount(self.raw_amount, self.decimals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFungibleHolding {
    pub mint_address: String,
    pub name: String,
    pub symbol: String,
    pub metadata_uri: String,
    pub image_url: Option<String>,
}

/// A token-metadata record found for one of the owner's mints, before its
/// off-chain document has been looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalAsset {
    pub mint_address: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl DigitalAsset {
    pub fn into_holding(self, image_url: Option<String>) -> NonFungibleHolding {
        NonFungibleHolding {
            mint_address: self.mint_address,
            name: self.name,
            symbol: self.symbol,
            metadata_uri: self.uri,
            image_url,
        }
    }
}

/// Everything one successful fetch produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletHoldings {
    pub tokens: Vec<FungibleHolding>,
    pub nfts: Vec<NonFungibleHolding>,
}
